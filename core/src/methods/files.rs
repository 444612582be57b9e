use serde::Serialize;

use crate::request::Request;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetUserProfilePhotosOptions {
    /// Sequential number of the first photo to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// 1-100, server default 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Returns `UserProfilePhotos`.
pub fn get_user_profile_photos(user_id: i64, options: GetUserProfilePhotosOptions) -> Request {
    Request::new("getUserProfilePhotos")
        .with("user_id", user_id)
        .with_options(options)
}

/// Returns a `File` whose `file_path` can be downloaded for at least an hour.
pub fn get_file(file_id: impl Into<String>) -> Request {
    Request::new("getFile").with("file_id", file_id.into())
}
