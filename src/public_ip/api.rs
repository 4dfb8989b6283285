use crate::error::Result;

pub(crate) trait FetchText {
    fn describe(&self) -> String;

    /// GET `url` and return the whole response body.
    fn fetch_text(&self, url: &str) -> Result<String>;
}
