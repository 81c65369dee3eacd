use crate::constants::LINK_TARGET;
use web_sys as web;

/// Open `url` in a new browsing context. A `None` window back from the host
/// means the popup was blocked and is reported as an error.
pub fn open_in_new_tab(url: &str) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let opened = window
        .open_with_url_and_target(url, LINK_TARGET)
        .map_err(|e| anyhow::anyhow!("window.open({}) threw: {:?}", url, e))?;
    if opened.is_none() {
        anyhow::bail!("window.open({}) was blocked by the browser", url);
    }
    log::info!("[pick] opened {}", url);
    Ok(())
}
