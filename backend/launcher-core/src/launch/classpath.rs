use crate::error::launch::LaunchError;

use common::ErrorLocation;
use models::Platform;

use std::panic::Location;
use std::path::PathBuf;

use log::trace;
use url::Url;

const FILE_SCHEME: &str = "file";

/// Turn `file:` URLs into absolute filesystem paths.
///
/// Fails on the first entry that is not a parseable `file:` URL.
#[track_caller]
pub fn resolve_classpath_urls(urls: &[String]) -> Result<Vec<PathBuf>, LaunchError> {
    let mut paths = Vec::with_capacity(urls.len());

    for raw in urls {
        let url = Url::parse(raw).map_err(|e| LaunchError::ClasspathResolution {
            message: format!("Unable to compose path from '{raw}': {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if url.scheme() != FILE_SCHEME {
            return Err(LaunchError::ClasspathResolution {
                message: format!(
                    "Unable to compose path from '{raw}': scheme '{}' is not '{FILE_SCHEME}'",
                    url.scheme()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let path = url
            .to_file_path()
            .map_err(|()| LaunchError::ClasspathResolution {
                message: format!("Unable to compose path from '{raw}': not a local file path"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        trace!("Classpath entry {raw} -> {}", path.display());
        paths.push(path);
    }

    Ok(paths)
}

/// Driver classpath first, then each path, joined with the platform separator.
pub fn compose_classpath(driver_classpath: &str, paths: &[PathBuf], platform: Platform) -> String {
    std::iter::once(driver_classpath.to_string())
        .chain(paths.iter().map(|p| p.display().to_string()))
        .collect::<Vec<_>>()
        .join(platform.classpath_separator())
}
