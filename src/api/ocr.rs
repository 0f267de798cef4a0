use serde_json::Value;

use super::put;
use crate::client::YoutuClient;
use crate::endpoint;
use crate::error::Result;
use crate::image::ImageSource;

/// Which side of a national id card the image shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdCardSide {
    #[default]
    Front = 0,
    Back = 1,
}

/// Vehicle registration or driver's license
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LicenseKind {
    #[default]
    Vehicle = 0,
    Driver = 1,
}

impl YoutuClient {
    fn ocr(&self, path: &str, image: &ImageSource) -> Result<Value> {
        let mut body = self.body();
        image.insert_into(&mut body, "image", "url")?;
        self.request(path, body)
    }

    pub fn idcard_ocr(&self, image: &ImageSource, side: IdCardSide) -> Result<Value> {
        let mut body = self.body();
        image.insert_into(&mut body, "image", "url")?;
        put(&mut body, "card_type", side as i32);
        self.request(endpoint::IDCARD_OCR, body)
    }

    pub fn general_ocr(&self, image: &ImageSource) -> Result<Value> {
        self.ocr(endpoint::GENERAL_OCR, image)
    }

    /// Business card
    pub fn bc_ocr(&self, image: &ImageSource) -> Result<Value> {
        self.ocr(endpoint::BC_OCR, image)
    }

    pub fn driver_license_ocr(&self, image: &ImageSource, kind: LicenseKind) -> Result<Value> {
        let mut body = self.body();
        image.insert_into(&mut body, "image", "url")?;
        put(&mut body, "type", kind as i32);
        self.request(endpoint::DRIVER_LICENSE_OCR, body)
    }

    pub fn credit_card_ocr(&self, image: &ImageSource) -> Result<Value> {
        self.ocr(endpoint::CREDIT_CARD_OCR, image)
    }

    pub fn biz_license_ocr(&self, image: &ImageSource) -> Result<Value> {
        self.ocr(endpoint::BIZ_LICENSE_OCR, image)
    }

    /// License plate
    pub fn plate_ocr(&self, image: &ImageSource) -> Result<Value> {
        self.ocr(endpoint::PLATE_OCR, image)
    }
}
