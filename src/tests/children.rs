use crate::{only_child, ChunkError};

#[test]
fn single_node() {
    assert_eq!(only_child(vec!["x"]), Ok("x"));
    assert_eq!(only_child(Some("x")), Ok("x"));
    assert_eq!(only_child(["x"]), Ok("x"));
}

#[test]
fn no_nodes() {
    assert_eq!(
        only_child(Vec::<&str>::new()),
        Err(ChunkError::Cardinality { found: 0 }),
    );
    assert_eq!(
        only_child(None::<&str>),
        Err(ChunkError::Cardinality { found: 0 }),
    );
}

#[test]
fn many_nodes() {
    assert_eq!(
        only_child(vec!["x", "y"]),
        Err(ChunkError::Cardinality { found: 2 }),
    );
    let err = only_child(["x", "y", "z"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "a chunk should have exactly one child, found 3",
    );
}

#[test]
fn load_failure_passed_through() {
    let nodes: Result<Vec<&str>, String> = Err("network unreachable".to_string());
    assert_eq!(
        only_child(nodes),
        Err(ChunkError::Load("network unreachable".to_string())),
    );

    // a successful load is still subject to the cardinality check
    let nodes: Result<Vec<&str>, String> = Ok(vec![]);
    assert_eq!(only_child(nodes), Err(ChunkError::Cardinality { found: 0 }));
}
