//! Output helpers for driver programs.

use thiserror::Error;

pub use ndarray_npy::NpzWriter;

/// Returned by `write_npz!` when an archive cannot be written.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The output file could not be created.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// An array could not be serialized into the archive.
    #[error("npz write error: {0}")]
    Npz(#[from] ndarray_npy::WriteNpzError),
}

/// Create a directory and all of its parents if they do not already exist.
///
/// Expands to a `std::io::Result<()>`.
#[macro_export]
macro_rules! mkdir {
    ( $dir:expr ) => {
        std::fs::create_dir_all(&$dir)
    };
}

/// Write a collection of arrays to a `.npz` archive under the given names.
///
/// Expands to a `Result<(), OutputError>`.
/// ```ignore
/// write_npz!(
///     outdir.join("data.npz"),
///     arrays: {
///         "time" => &time,
///         "polarisation" => &D,
///     }
/// )?;
/// ```
#[macro_export]
macro_rules! write_npz {
    ( $filename:expr, arrays: { $( $key:expr => $arr:expr ),* $(,)? } ) => {
        (|| -> Result<(), $crate::utils::OutputError> {
            let file = std::fs::File::create($filename)?;
            let mut npz = $crate::utils::NpzWriter::new(file);
            $( npz.add_array($key, $arr)?; )*
            npz.finish()?;
            Ok(())
        })()
    };
}
