//! # VSOP87 file cache
//!
//! Locate the `VSOP87B.*` files in the user cache directory
//! (`<cache dir>/vsop_ephem/vsop87`) and, with the `vsop-download` feature,
//! fetch the missing ones from the CDS mirror of catalogue VI/81.
use camino::{Utf8Path, Utf8PathBuf};
use directories::BaseDirs;

use crate::{planet::Planet, vsop_errors::VsopError};

/// CDS mirror of the VSOP87 distribution (catalogue VI/81).
pub const VSOP87_BASE_URL: &str = "https://cdsarc.cds.unistra.fr/ftp/VI/81";

/// Default cache directory of the coefficient files.
pub fn cache_directory() -> Result<Utf8PathBuf, VsopError> {
    let base_dir = BaseDirs::new().ok_or_else(|| {
        VsopError::InvalidDataSource("cannot determine the user cache directory".into())
    })?;
    let cache_path = Utf8Path::from_path(base_dir.cache_dir()).ok_or_else(|| {
        VsopError::Utf8PathError(format!("{}", base_dir.cache_dir().display()))
    })?;
    Ok(cache_path.join("vsop_ephem").join("vsop87"))
}

pub fn coefficient_file_url(planet: Planet) -> String {
    format!("{VSOP87_BASE_URL}/{}", planet.vsop87b_file_name())
}

/// Download a large file from a URL
/// Uses reqwest to download the file in chunks and saves it with tokio's async file I/O.
/// The data is first written to `<path>.part`, then renamed, so an interrupted
/// download never leaves a truncated table behind.
///
/// Arguments
/// ---------
/// * `url`: the URL of the file to download
/// * `path`: the path to save the downloaded file
///
/// Return
/// ------
/// * An error if the download fails
/// * Ok(()) if the download is successful
#[cfg(feature = "vsop-download")]
async fn download_big_file(url: &str, path: &Utf8Path) -> Result<(), VsopError> {
    use tokio::{fs::File, io::AsyncWriteExt};
    use tokio_stream::StreamExt;

    let partial = Utf8PathBuf::from(format!("{path}.part"));
    log::info!("Downloading {url}...");

    let response = reqwest::get(url).await?.error_for_status()?;
    let mut file = File::create(&partial).await?;
    let mut stream = response.bytes_stream();

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result?;
        file.write_all(&chunk).await?;
    }

    file.flush().await?;
    tokio::fs::rename(&partial, path).await?;

    log::info!("Downloaded {url} to {path}");
    Ok(())
}

/// Get the path of a planet's coefficient file inside `directory`.
///
/// Arguments
/// ---------
/// * `directory`: the cache directory holding the `VSOP87B.*` files
/// * `planet`: the planet whose table is requested
///
/// Return
/// ------
/// * The path of the file, downloaded first if it is missing and the
///   `vsop-download` feature is enabled
/// * [`VsopError::CoefficientFileNotFound`] if it is missing and cannot be downloaded
pub fn get_coefficient_file(directory: &Utf8Path, planet: Planet) -> Result<Utf8PathBuf, VsopError> {
    let local_file = directory.join(planet.vsop87b_file_name());
    if local_file.exists() {
        return Ok(local_file);
    }

    #[cfg(feature = "vsop-download")]
    {
        std::fs::create_dir_all(directory)
            .map_err(|err| VsopError::UnableToCreateCacheDir(format!("{directory}: {err}")))?;

        let url = coefficient_file_url(planet);
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(download_big_file(&url, &local_file))?;

        Ok(local_file)
    }

    #[cfg(not(feature = "vsop-download"))]
    {
        log::warn!("{local_file} is missing and the vsop-download feature is disabled");
        Err(VsopError::CoefficientFileNotFound(local_file.to_string()))
    }
}
