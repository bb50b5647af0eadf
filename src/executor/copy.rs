//! File copy implementation

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

/// Copy a file using the write-then-rename strategy.
///
/// 1. Create any missing parent directories under the destination
/// 2. Stream to a temporary `<name>.part` file
/// 3. Flush and sync to disk
/// 4. Carry over the source mtime
/// 5. Rename into the final destination, overwriting existing content
///
/// The mtime carry-over is what makes reconciliation idempotent: a file
/// copied this pass compares equal next pass and is never re-copied.
///
/// The temp name appends `.part` to the full file name rather than
/// swapping the extension, so copying `a.txt` never clobbers a sibling
/// replica file legitimately named `a.part`.
///
/// # Returns
/// * `Ok(u64)` - Number of bytes copied
/// * `Err(io::Error)` - failure at any step; a leftover `.part` file is
///   overwritten by the next attempt
pub fn copy_file(src: &Path, dest: &Path) -> io::Result<u64> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    let part_path = part_path_for(dest)?;

    let mut src_file = File::open(src)?;
    let mut part_file = File::create(&part_path)?;

    let mut buffer = vec![0u8; 128 * 1024];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = src_file.read(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        part_file.write_all(&buffer[0..bytes_read])?;
        total_bytes += bytes_read as u64;
    }

    part_file.sync_all()?;

    // Drop the file handle before rename (required on Windows)
    drop(part_file);

    let src_metadata = fs::metadata(src)?;
    let mtime = src_metadata.modified()?;
    filetime::set_file_mtime(&part_path, filetime::FileTime::from_system_time(mtime))?;

    // Atomic on POSIX systems (single syscall)
    fs::rename(&part_path, dest)?;

    Ok(total_bytes)
}

fn part_path_for(dest: &Path) -> io::Result<std::path::PathBuf> {
    let mut file_name = dest
        .file_name()
        .ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "destination has no file name")
        })?
        .to_os_string();
    file_name.push(".part");
    Ok(dest.with_file_name(file_name))
}
