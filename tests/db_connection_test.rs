use avengers_api::db::init::connect;
use tempfile::tempdir;

#[actix_web::test]
async fn test_connect_when_no_env_var_expect_sqlite_file_created() {
    let dir = tempdir().unwrap();
    let _connection = connect(dir.path()).await.unwrap();
    let actual = dir.path().join("avengers.sqlite3").exists();
    let expected = true;
    assert_eq!(actual, expected);
}

#[actix_web::test]
async fn test_connect_when_db_directory_missing_expect_error() {
    let dir = tempdir().unwrap();
    let missing_path = dir.path().join("does/not/exist");
    let actual = connect(&missing_path).await.unwrap_err();
    let expected = "unable to open database file";
    assert!(
        actual.to_string().contains(expected),
        "\"{actual}\" doesn't contain {expected}"
    );
}
