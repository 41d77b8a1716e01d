//! Poster, profile and still image download.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::instrument;

use crate::entities::Configuration;
use crate::error::{Error, Result};
use crate::session::Session;

/// Downloads the image at `img_path` to `{dir}/{filename}`.
///
/// The URL is `{base}{size}/{img_path}` where the base comes from the
/// configuration (secure or plain per `secure`). Pass the size token
/// through the configuration's validators (e.g.
/// [`Configuration::poster_size`]) to fall back to `"original"` for
/// unknown tokens. The body is streamed to the file chunk by chunk; an
/// existing file is overwritten, the directory is not created.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// - [`Error::ImageUnavailable`] on a non-success response; nothing is
///   written in that case.
/// - [`Error::Http`] on transport failures.
/// - [`Error::Io`] when the file cannot be created or written.
#[instrument(skip_all)]
pub async fn download(
    session: &Session,
    conf: &Configuration,
    img_path: &str,
    size: &str,
    dir: &Path,
    filename: &str,
    secure: bool,
) -> Result<PathBuf> {
    let base = if secure {
        conf.img_secure_base_url()
    } else {
        conf.img_base_url()
    };
    let url = format!("{base}{size}/{img_path}");

    tracing::debug!(%url, "image download");

    let mut response = session.http_client().get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::ImageUnavailable {
            url,
            http_status: status.as_u16(),
        });
    }

    let target = dir.join(filename);
    let mut file = File::create(&target)?;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk)?;
    }
    Ok(target)
}
