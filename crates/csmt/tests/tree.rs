use csmt::Csmt;
use csmt_types::{Digest32, HashPolicy as _, IdentityPolicy, Key, Sha2Policy};

fn look_for_key(tree: &Csmt<IdentityPolicy>, key: Key, proof: &[&str]) -> bool {
    let contains = tree.contains(key);

    if proof.is_empty() == contains {
        return false;
    }

    tree.membership_proof(key).path == proof
}

fn digest(encoded: &str) -> anyhow::Result<Digest32> {
    let mut out = [0u8; 32];

    hex::decode_to_slice(encoded, &mut out)?;

    Ok(out)
}

#[test]
fn blank_erase() {
    let mut tree = Csmt::<Sha2Policy>::new();

    assert_eq!(tree.len(), 0);
    assert!(tree.is_empty());
    assert!(!tree.contains(0));
    assert!(tree.membership_proof(0).is_empty());
    assert!(tree.root_digest().is_none());

    tree.erase(0);

    assert_eq!(tree.len(), 0);
    assert!(!tree.contains(0));
    assert!(tree.membership_proof(0).is_empty());
}

#[test]
fn insert_erase() {
    let mut tree = Csmt::<IdentityPolicy>::new();

    tree.insert(0, "hello");

    assert_eq!(tree.len(), 1);
    assert!(look_for_key(&tree, 0, &["hello"]));

    tree.erase(0);

    assert_eq!(tree.len(), 0);
    assert!(look_for_key(&tree, 0, &[]));
    assert!(tree.root().is_none());
}

#[test]
fn update() {
    let mut tree = Csmt::<IdentityPolicy>::new();

    tree.insert(0, "hello");

    assert_eq!(tree.len(), 1);
    assert!(look_for_key(&tree, 0, &["hello"]));

    tree.insert(0, "world");

    assert_eq!(tree.len(), 1);
    assert!(look_for_key(&tree, 0, &["world"]));
}

#[test]
fn update_is_idempotent() {
    let mut tree = Csmt::<IdentityPolicy>::new();

    tree.insert(2, "hello");
    tree.insert(3, "world");

    let before = tree.clone();

    tree.insert(2, "hello");

    assert_eq!(tree, before);
}

#[test]
fn two_nodes() {
    let mut tree = Csmt::<IdentityPolicy>::new();

    tree.insert(2, "hello");
    tree.insert(3, "world");

    assert!(tree.contains(2));

    assert_eq!(tree.len(), 2);
    assert!(look_for_key(&tree, 2, &["hello", "helloworld"]));
    assert!(look_for_key(&tree, 3, &["world", "helloworld"]));

    tree.erase(6);

    assert_eq!(tree.len(), 2);
    assert!(look_for_key(&tree, 0, &[]));
    assert!(look_for_key(&tree, 3, &["world", "helloworld"]));
}

#[test]
fn two_nodes_erase() {
    let mut tree = Csmt::<IdentityPolicy>::new();

    tree.insert(2, "hello");
    tree.insert(3, "world");

    assert_eq!(tree.len(), 2);
    assert!(look_for_key(&tree, 2, &["hello", "helloworld"]));
    assert!(look_for_key(&tree, 3, &["world", "helloworld"]));

    tree.erase(2);

    assert_eq!(tree.len(), 1);
    assert!(look_for_key(&tree, 0, &[]));
    assert!(look_for_key(&tree, 3, &["world"]));
}

#[test]
fn not_intersects() {
    let mut tree = Csmt::<IdentityPolicy>::new();

    tree.insert(2, "hello");

    assert!(look_for_key(&tree, 2, &["hello"]));

    tree.erase(3);

    assert_eq!(tree.len(), 1);
    assert!(look_for_key(&tree, 2, &["hello"]));
    assert!(look_for_key(&tree, 3, &[]));
}

#[test]
fn insert_trick() {
    let mut tree = Csmt::<IdentityPolicy>::new();

    tree.insert(12, "VALUE12");
    tree.insert(13, "VALUE13");
    tree.insert(12, "VALUE12");

    assert!(tree.contains(13));
    assert_eq!(tree.len(), 2);
}

#[test]
fn binary_tree_proof() {
    let mut tree = Csmt::<IdentityPolicy>::new();

    for key in 0..8u64 {
        tree.insert(key, &key.to_string());
    }

    assert!(look_for_key(&tree, 0, &["0", "01", "0123", "01234567"]));
    assert!(look_for_key(&tree, 1, &["1", "01", "0123", "01234567"]));
    assert!(look_for_key(&tree, 5, &["5", "45", "4567", "01234567"]));
    assert!(look_for_key(&tree, 6, &["6", "67", "4567", "01234567"]));

    assert_eq!(tree.root_digest().map(String::as_str), Some("01234567"));
}

#[test]
fn boundary_keys() {
    let mut tree = Csmt::<IdentityPolicy>::new();

    tree.insert(0, "lo");
    tree.insert(u64::MAX, "hi");

    assert_eq!(tree.len(), 2);
    assert!(look_for_key(&tree, 0, &["lo", "lohi"]));
    assert!(look_for_key(&tree, u64::MAX, &["hi", "lohi"]));

    tree.erase(0);

    assert_eq!(tree.len(), 1);
    assert!(look_for_key(&tree, u64::MAX, &["hi"]));
}

#[test]
fn erase_restores_prior_root() {
    let mut tree = Csmt::<IdentityPolicy>::new();

    for key in [3u64, 7, 20, 41] {
        tree.insert(key, &format!("VALUE{key}"));
    }

    let before = tree.clone();

    tree.insert(11, "VALUE11");
    tree.erase(11);

    assert_eq!(tree, before);
    assert_eq!(tree.root_digest(), before.root_digest());
}

#[test]
fn reinsert_matches_untouched_tree() {
    let mut touched = Csmt::<IdentityPolicy>::new();
    let mut untouched = Csmt::<IdentityPolicy>::new();

    for key in [2u64, 3, 9] {
        touched.insert(key, &format!("VALUE{key}"));
        untouched.insert(key, &format!("VALUE{key}"));
    }

    touched.erase(3);
    touched.insert(3, "VALUE3");

    assert_eq!(touched, untouched);
}

#[test]
fn proof_ends_at_root() {
    let mut tree = Csmt::<Sha2Policy>::new();

    for key in [1u64, 5, 8, 13, 21] {
        tree.insert(key, format!("VALUE{key}").as_bytes());
    }

    for key in [1u64, 5, 8, 13, 21] {
        let proof = tree.membership_proof(key);

        assert!(!proof.is_empty());
        assert_eq!(proof.root(), tree.root_digest());
        assert_eq!(
            proof.leaf(),
            Some(&Sha2Policy::leaf_hash(format!("VALUE{key}").as_bytes())),
        );
    }
}

#[test]
fn sha2_single_leaf_root() -> anyhow::Result<()> {
    let mut tree = Csmt::<Sha2Policy>::new();

    tree.insert(0, b"VALUE0");

    assert_eq!(
        tree.root_digest(),
        Some(&digest(
            "94691a6dca8d9b3529a9ba48bd482eace32358548c0dfab12bfa5f860a1d627d",
        )?),
    );

    Ok(())
}

#[test]
fn sha2_fixed_roots() -> anyhow::Result<()> {
    let mut tree = Csmt::<Sha2Policy>::new();

    for key in 0..3u64 {
        tree.insert(key, format!("VALUE{key}").as_bytes());
    }

    assert_eq!(
        tree.root_digest(),
        Some(&digest(
            "9f0aac7fd503d5ff378130cd7a45c6c14943ae78c43598d3a6bb202c7944c10a",
        )?),
    );

    let mut tree = Csmt::<Sha2Policy>::new();

    for key in 1..4u64 {
        tree.insert(key, format!("VALUE{key}").as_bytes());
    }

    assert_eq!(
        tree.root_digest(),
        Some(&digest(
            "70d61a47a555b77eb0880b2663b8e76d3877b18bcdae08f958f69cd5f7e06b37",
        )?),
    );

    Ok(())
}
