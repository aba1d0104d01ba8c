use catalog_database::{InMemoryContentRepository, load_seed_file};
use catalog_interface::ContentRepository;
use std::io::Write;

#[tokio::test]
async fn seed_file_populates_store() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"title": "Movie A", "genreList": ["Action"]}},
            {{"title": "Series B", "subTitle": "Season 1", "duration": 45}}
        ]"#
    )
    .unwrap();

    let inputs = load_seed_file(file.path()).await.unwrap();
    assert_eq!(inputs.len(), 2);

    let repo = InMemoryContentRepository::with_inputs(inputs);
    let contents = repo.get_many_contents().await.unwrap();

    assert_eq!(contents.len(), 2);
    assert_eq!(contents[0].genre_list, vec!["Action"]);
    assert_eq!(contents[1].sub_title.as_deref(), Some("Season 1"));
    assert_ne!(contents[0].id, contents[1].id);
}

#[tokio::test]
async fn seed_file_must_be_an_array_of_payloads() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"title": "Not in an array"}}"#).unwrap();

    let err = load_seed_file(file.path()).await.unwrap_err();
    assert!(err.to_string().contains("Seed error"));
}

#[tokio::test]
async fn missing_seed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_seed_file(&dir.path().join("absent.json")).await;
    assert!(result.is_err());
}
