use std::path::PathBuf;

use blob_seed::{tools::inmem::InMemoryTool, ToolConfig};

const CONTAINER_NAME: &str = "margies";

#[tokio::test]
async fn seeds_container_with_directory_tree() {
    let source = tree_fs::from_yaml_str(
        r"
        files:
        - path: readme.txt
          content: travel docs
        - path: brochures/dubai.pdf
          content: dubai
        - path: brochures/vegas.pdf
          content: vegas
        ",
    )
    .unwrap();

    let tool = InMemoryTool::default();
    let uploader = ToolConfig::with_tool(Box::new(tool.clone()));

    uploader
        .seed(CONTAINER_NAME, source.root.as_path())
        .await
        .unwrap();

    assert!(
        tool.container_exists(CONTAINER_NAME),
        "container should exist after seeding"
    );

    assert_eq!(
        tool.blob_names(CONTAINER_NAME),
        vec![
            PathBuf::from("brochures").join("dubai.pdf"),
            PathBuf::from("brochures").join("vegas.pdf"),
            PathBuf::from("readme.txt"),
        ],
        "blob names should be the relative paths under the source directory"
    );

    assert_eq!(
        tool.blob_content(CONTAINER_NAME, PathBuf::from("readme.txt").as_path()),
        Some(b"travel docs".to_vec()),
        "blob content should match the local file"
    );
}

#[tokio::test]
async fn reseeding_an_existing_container_succeeds() {
    let source = tree_fs::from_yaml_str(
        r"
        files:
        - path: readme.txt
          content: travel docs
        ",
    )
    .unwrap();

    let tool = InMemoryTool::default();
    let uploader = ToolConfig::with_tool(Box::new(tool.clone()));

    uploader
        .seed(CONTAINER_NAME, source.root.as_path())
        .await
        .unwrap();

    // second run against the already-existing container
    assert!(
        uploader.seed(CONTAINER_NAME, source.root.as_path()).await.is_ok(),
        "re-running the flow should not fail"
    );

    assert_eq!(tool.blob_names(CONTAINER_NAME).len(), 1);
}

#[tokio::test]
async fn empty_source_directory_uploads_nothing() {
    let source = tree_fs::from_yaml_str(
        r"
        files:
        ",
    )
    .unwrap();

    let tool = InMemoryTool::default();
    let uploader = ToolConfig::with_tool(Box::new(tool.clone()));

    uploader
        .seed(CONTAINER_NAME, source.root.as_path())
        .await
        .unwrap();

    assert!(tool.container_exists(CONTAINER_NAME));
    assert!(
        tool.blob_names(CONTAINER_NAME).is_empty(),
        "no blobs should be written for an empty source directory"
    );
}
