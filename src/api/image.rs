use serde_json::Value;

use super::put;
use crate::client::YoutuClient;
use crate::endpoint;
use crate::error::Result;
use crate::image::ImageSource;

impl YoutuClient {
    /// Shared shape of the classifier endpoints: one image plus an optional cookie
    fn classify(&self, path: &str, image: &ImageSource, cookie: &str) -> Result<Value> {
        let mut body = self.body();
        image.insert_into(&mut body, "image", "url")?;
        if !cookie.is_empty() {
            put(&mut body, "cookie", cookie);
        }
        self.request(path, body)
    }

    /// Blur detection
    pub fn fuzzy_detect(&self, image: &ImageSource, cookie: &str) -> Result<Value> {
        self.classify(endpoint::FUZZY_DETECT, image, cookie)
    }

    /// Whether the image shows food
    pub fn food_detect(&self, image: &ImageSource, cookie: &str) -> Result<Value> {
        self.classify(endpoint::FOOD_DETECT, image, cookie)
    }

    /// Scene and object tags
    pub fn image_tag(&self, image: &ImageSource, cookie: &str) -> Result<Value> {
        self.classify(endpoint::IMAGE_TAG, image, cookie)
    }

    /// Pornography classifier
    pub fn image_porn(&self, image: &ImageSource, cookie: &str) -> Result<Value> {
        self.classify(endpoint::IMAGE_PORN, image, cookie)
    }

    /// Violence and terrorism classifier
    pub fn image_terrorism(&self, image: &ImageSource, cookie: &str) -> Result<Value> {
        self.classify(endpoint::IMAGE_TERRORISM, image, cookie)
    }

    /// Vehicle make, model and color
    pub fn car_classify(&self, image: &ImageSource, cookie: &str) -> Result<Value> {
        self.classify(endpoint::CAR_CLASSIFY, image, cookie)
    }
}
