use serde_json::Value;

use super::{put, put_strings};
use crate::client::YoutuClient;
use crate::endpoint;
use crate::error::Result;
use crate::image::ImageSource;

pub const DEFAULT_TOPN: u32 = 5;
pub const DEFAULT_MIN_SIZE: u32 = 40;

impl YoutuClient {
    /// Detect faces and their attributes. `big_face` keeps only the largest one.
    pub fn detect_face(&self, image: &ImageSource, big_face: bool) -> Result<Value> {
        let mut body = self.body();
        image.insert_into(&mut body, "image", "url")?;
        put(&mut body, "mode", u8::from(big_face));
        self.request(endpoint::DETECT_FACE, body)
    }

    /// Locate facial landmarks
    pub fn face_shape(&self, image: &ImageSource, big_face: bool) -> Result<Value> {
        let mut body = self.body();
        image.insert_into(&mut body, "image", "url")?;
        put(&mut body, "mode", u8::from(big_face));
        self.request(endpoint::FACE_SHAPE, body)
    }

    /// Similarity between the dominant faces of two images
    pub fn face_compare(&self, a: &ImageSource, b: &ImageSource) -> Result<Value> {
        let mut body = self.body();
        a.insert_into(&mut body, "imageA", "urlA")?;
        b.insert_into(&mut body, "imageB", "urlB")?;
        self.request(endpoint::FACE_COMPARE, body)
    }

    /// Check whether the face in `image` belongs to `person_id`
    pub fn face_verify(&self, person_id: &str, image: &ImageSource) -> Result<Value> {
        let mut body = self.body();
        put(&mut body, "person_id", person_id);
        image.insert_into(&mut body, "image", "url")?;
        self.request(endpoint::FACE_VERIFY, body)
    }

    /// Find the best matching person inside `group_id`
    pub fn face_identify(&self, group_id: &str, image: &ImageSource) -> Result<Value> {
        let mut body = self.body();
        put(&mut body, "group_id", group_id);
        image.insert_into(&mut body, "image", "url")?;
        self.request(endpoint::FACE_IDENTIFY, body)
    }

    /// Identify every face in `image` against one group or several.
    ///
    /// Empty `group_id` / `group_ids` are left out of the request. Use
    /// [`DEFAULT_TOPN`] and [`DEFAULT_MIN_SIZE`] unless tuning.
    pub fn multi_face_identify(
        &self,
        group_id: &str,
        group_ids: &[String],
        image: &ImageSource,
        topn: u32,
        min_size: u32,
    ) -> Result<Value> {
        let mut body = self.body();
        if !group_id.is_empty() {
            put(&mut body, "group_id", group_id);
        }
        if !group_ids.is_empty() {
            put_strings(&mut body, "group_ids", group_ids);
        }
        image.insert_into(&mut body, "image", "url")?;
        put(&mut body, "topn", topn);
        put(&mut body, "min_size", min_size);
        self.request(endpoint::MULTI_FACE_IDENTIFY, body)
    }
}
