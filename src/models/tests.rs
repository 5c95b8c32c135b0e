#[cfg(test)]
mod models_tests {
    use crate::models::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_picture_is_blank() {
        let picture = build_default_picture();

        assert!(picture.id.is_unset());
        assert!(picture.pid.is_unset());
        assert_eq!(picture.id.as_str(), "0");
        assert!(picture.name.is_empty());
        assert!(picture.source_name.is_empty());
        assert!(picture.path_name.is_empty());
        assert!(picture.url.is_empty());
        assert!(picture.cre_time.is_empty());
        assert!(picture.article_names.is_empty());
        assert_eq!(picture.size, 0);
        assert_eq!(picture.star_status, 0);
        assert_eq!(picture.del_time, 0);
        assert!(!picture.is_starred());
        assert!(!picture.is_deleted());
    }

    #[test]
    fn test_picture_from_backend_json() {
        let json = r#"{
            "id": 1024,
            "pid": "7",
            "name": "cover.png",
            "sourceName": "IMG_0001.png",
            "pathName": "/home/bl/cover.png",
            "url": "http://x/pic/cover.png",
            "size": 2048,
            "starStatus": 1,
            "creTime": "2024-03-01 10:00:00",
            "articleNames": "Notes,Daily",
            "delTime": 0
        }"#;

        let picture: Picture = serde_json::from_str(json).unwrap();

        assert_eq!(picture.id, PictureId::from(1024));
        assert_eq!(picture.pid.as_str(), "7");
        assert!(!picture.id.is_unset());
        assert_eq!(picture.source_name, "IMG_0001.png");
        assert_eq!(picture.cre_time, "2024-03-01 10:00:00");
        assert!(picture.is_starred());
        assert_eq!(picture.article_names(), vec!["Notes", "Daily"]);
    }

    #[test]
    fn test_picture_missing_fields_use_defaults() {
        let picture: Picture = serde_json::from_str(r#"{"id":"abc","delTime":1700000000}"#).unwrap();

        assert_eq!(picture.id.as_str(), "abc");
        assert!(picture.pid.is_unset());
        assert!(picture.is_deleted());
        assert!(picture.article_names().is_empty());
    }

    #[test]
    fn test_picture_serializes_camel_case() {
        let value = serde_json::to_value(build_default_picture()).unwrap();

        assert_eq!(value["id"], "0");
        assert_eq!(value["sourceName"], "");
        assert_eq!(value["starStatus"], 0);
        assert!(value.get("source_name").is_none());
    }

    #[test]
    fn test_picture_null_ids_are_unset() {
        let picture: Picture = serde_json::from_str(r#"{"id":5,"pid":null}"#).unwrap();

        assert_eq!(picture.id.as_str(), "5");
        assert!(picture.pid.is_unset());
    }

    #[test]
    fn test_picture_whole_float_ids() {
        let picture: Picture = serde_json::from_str(r#"{"id":5.0,"pid":-2.0}"#).unwrap();

        assert_eq!(picture.id, PictureId::from(5));
        assert_eq!(picture.pid.as_str(), "-2");
    }

    #[test]
    fn test_picture_id_rejects_fractional_float() {
        assert!(serde_json::from_str::<PictureId>("5.5").is_err());
        assert!(serde_json::from_str::<Picture>(r#"{"id":1.25}"#).is_err());
    }

    #[test]
    fn test_picture_id_rejects_other_types() {
        assert!(serde_json::from_str::<PictureId>("true").is_err());
        assert!(serde_json::from_str::<PictureId>("[1]").is_err());
    }

    #[test]
    fn test_upload_file_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("photo.jpg");
        fs::write(&path, vec![0u8; 4096]).unwrap();

        let file = UploadFile::from_path(&path).unwrap();
        assert_eq!(file.name, "photo.jpg");
        assert_eq!(file.size, 4096);

        assert!(UploadFile::from_path(temp_dir.path().join("missing.jpg")).is_err());
    }

    #[test]
    fn test_upload_file_size_in_mib() {
        let file = UploadFile::new("a.png", 3 * 1024 * 1024);
        assert_eq!(file.size_in_mib(), 3.0);
    }

    #[test]
    fn test_upload_response_success_code() {
        let ok: UploadResponse =
            serde_json::from_str(r#"{"code":"20000","msg":"ok","data":"http://x/a.png"}"#).unwrap();
        assert!(ok.is_success());
        assert_eq!(ok.data, Some(serde_json::json!("http://x/a.png")));

        let failed: UploadResponse = serde_json::from_str(r#"{"code":"50000","msg":"bad"}"#).unwrap();
        assert!(!failed.is_success());
        assert!(failed.data.is_none());
    }

    #[test]
    fn test_notification_serialization() {
        let value = serde_json::to_value(Notification::error("bad", "Upload failed")).unwrap();
        assert_eq!(value["kind"], "error");
        assert_eq!(value["title"], "Upload failed");

        let value = serde_json::to_value(Notification::success("done")).unwrap();
        assert_eq!(value["kind"], "success");
        assert!(value.get("title").is_none());
    }

    #[test]
    fn test_picture_config_wire_format() {
        let config: PictureConfig = serde_json::from_str(r#"{"picStyle":{"maxSize":2}}"#).unwrap();
        assert_eq!(config.pic_style.max_size, 2.0);

        let config: PictureConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.pic_style, PicStyle::default());
        assert_eq!(config.pic_style.max_size, 10.0);
    }
}
