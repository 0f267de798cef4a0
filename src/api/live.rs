use serde_json::Value;
use std::path::Path;

use super::put;
use crate::client::YoutuClient;
use crate::endpoint;
use crate::error::{Error, Result};
use crate::image::{self, ImageSource};

impl YoutuClient {
    /// Fetch a four-digit lip-reading challenge
    pub fn live_get_four(&self) -> Result<Value> {
        self.request(endpoint::LIVE_GET_FOUR, self.body())
    }

    /// Check a video of the user reading `validate_data`.
    ///
    /// With `card`, the face in the video is also compared against that
    /// photo. The card has to be uploaded; the service does not fetch urls
    /// here.
    pub fn live_detect_four(
        &self,
        video: &Path,
        validate_data: &str,
        card: Option<&ImageSource>,
    ) -> Result<Value> {
        if card.is_some_and(ImageSource::is_url) {
            return Err(Error::Config("card image must be uploaded, not a url".into()));
        }

        let mut body = self.body();
        put(&mut body, "validate_data", validate_data);
        put(&mut body, "video", image::read_base64(video)?);
        put(&mut body, "compare_flag", card.is_some());
        if let Some(card) = card {
            card.insert_into(&mut body, "card", "card")?;
        }
        self.request(endpoint::LIVE_DETECT_FOUR, body)
    }

    /// Liveness check plus comparison against the id card registry photo
    pub fn idcard_live_detect_four(
        &self,
        video: &Path,
        validate_data: &str,
        idcard_number: &str,
        idcard_name: &str,
    ) -> Result<Value> {
        let mut body = self.body();
        put(&mut body, "idcard_number", idcard_number);
        put(&mut body, "idcard_name", idcard_name);
        put(&mut body, "validate_data", validate_data);
        put(&mut body, "video", image::read_base64(video)?);
        self.request(endpoint::IDCARD_LIVE_DETECT_FOUR, body)
    }

    pub fn idcard_face_compare(
        &self,
        idcard_number: &str,
        idcard_name: &str,
        image: &ImageSource,
    ) -> Result<Value> {
        let mut body = self.body();
        put(&mut body, "idcard_number", idcard_number);
        put(&mut body, "idcard_name", idcard_name);
        image.insert_into(&mut body, "image", "url")?;
        self.request(endpoint::IDCARD_FACE_COMPARE, body)
    }

    /// Check that an id number and name belong together
    pub fn validate_idcard(&self, idcard_number: &str, idcard_name: &str) -> Result<Value> {
        let mut body = self.body();
        put(&mut body, "idcard_number", idcard_number);
        put(&mut body, "idcard_name", idcard_name);
        self.request(endpoint::VALIDATE_IDCARD, body)
    }
}
