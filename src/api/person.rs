use serde_json::Value;

use super::{put, put_strings};
use crate::client::YoutuClient;
use crate::endpoint;
use crate::error::Result;
use crate::image::{self, ImageSource};

impl YoutuClient {
    /// Create a person from one face image and place it in `group_ids`.
    /// Groups that do not exist yet are created by the service.
    pub fn new_person(
        &self,
        person_id: &str,
        person_name: &str,
        group_ids: &[String],
        image: &ImageSource,
        tag: &str,
    ) -> Result<Value> {
        let mut body = self.body();
        put(&mut body, "person_id", person_id);
        put(&mut body, "person_name", person_name);
        put_strings(&mut body, "group_ids", group_ids);
        image.insert_into(&mut body, "image", "url")?;
        put(&mut body, "tag", tag);
        self.request(endpoint::NEW_PERSON, body)
    }

    pub fn del_person(&self, person_id: &str) -> Result<Value> {
        let mut body = self.body();
        put(&mut body, "person_id", person_id);
        self.request(endpoint::DEL_PERSON, body)
    }

    /// Add faces to an existing person. All images must be the same kind.
    pub fn add_face(&self, person_id: &str, images: &[ImageSource], tag: &str) -> Result<Value> {
        let mut body = self.body();
        put(&mut body, "person_id", person_id);
        image::insert_many(images, &mut body, "images", "urls")?;
        put(&mut body, "tag", tag);
        self.request(endpoint::ADD_FACE, body)
    }

    pub fn del_face(&self, person_id: &str, face_ids: &[String]) -> Result<Value> {
        let mut body = self.body();
        put(&mut body, "person_id", person_id);
        put_strings(&mut body, "face_ids", face_ids);
        self.request(endpoint::DEL_FACE, body)
    }

    pub fn set_info(&self, person_id: &str, person_name: &str, tag: &str) -> Result<Value> {
        let mut body = self.body();
        put(&mut body, "person_id", person_id);
        put(&mut body, "person_name", person_name);
        put(&mut body, "tag", tag);
        self.request(endpoint::SET_INFO, body)
    }

    pub fn get_info(&self, person_id: &str) -> Result<Value> {
        let mut body = self.body();
        put(&mut body, "person_id", person_id);
        self.request(endpoint::GET_INFO, body)
    }

    pub fn get_group_ids(&self) -> Result<Value> {
        self.request(endpoint::GET_GROUP_IDS, self.body())
    }

    pub fn get_person_ids(&self, group_id: &str) -> Result<Value> {
        let mut body = self.body();
        put(&mut body, "group_id", group_id);
        self.request(endpoint::GET_PERSON_IDS, body)
    }

    pub fn get_face_ids(&self, person_id: &str) -> Result<Value> {
        let mut body = self.body();
        put(&mut body, "person_id", person_id);
        self.request(endpoint::GET_FACE_IDS, body)
    }

    pub fn get_face_info(&self, face_id: &str) -> Result<Value> {
        let mut body = self.body();
        put(&mut body, "face_id", face_id);
        self.request(endpoint::GET_FACE_INFO, body)
    }
}
