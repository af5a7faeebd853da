use anyhow::Result;

use crate::io::real::LsblkLister;
use crate::io::traits::DiskLister;

pub fn handle_list() -> Result<()> {
    let disks = LsblkLister::new().list_disks()?;
    for disk in &disks {
        println!("{disk}");
    }
    Ok(())
}
