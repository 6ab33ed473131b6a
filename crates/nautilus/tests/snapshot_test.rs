use nautilus::geom::size;
use nautilus::tree::{Side, Tree};
use nautilus::{Arranger, ArrangerOptions, LayoutSnapshot};
use serde_json::json;

fn tree_with_sizes() -> (Tree<String>, Arranger) {
    let mut tree: Tree<String> = Tree::new();
    let mut arranger = Arranger::new(
        ArrangerOptions::from_config(&json!({
            "mindmap": {
                "parentChildSpace": 30,
                "siblingSpace": 20,
                "cousinSpace": 12,
                "expanderSize": 13
            }
        }))
        .unwrap(),
    );

    let root = tree.set_root("root", "Central topic".to_string()).unwrap();
    arranger.record_node_size(root, size(112.0, 38.0));
    for (id, side, width) in [("left", Side::B, 60.0), ("right", Side::A, 48.0)] {
        let node = tree.add_child(root, id, id.to_uppercase()).unwrap();
        tree.set_side(node, side).unwrap();
        arranger.record_node_size(node, size(width, 38.0));
    }
    let right = tree.find("right").unwrap();
    let hidden = tree.add_child(right, "hidden", "Hidden".to_string()).unwrap();
    tree.set_folded(right, true).unwrap();
    assert_eq!(tree.payload(hidden).map(String::as_str), Some("Hidden"));

    (tree, arranger)
}

#[test]
fn snapshot_lists_nodes_in_preorder() {
    let (tree, mut arranger) = tree_with_sizes();
    arranger.calculate(&tree).unwrap();
    let snap = arranger.snapshot(&tree).unwrap();

    let ids: Vec<&str> = snap.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["root", "left", "right", "hidden"]);
    assert_eq!(
        snap.nodes.iter().map(|n| n.visible).collect::<Vec<_>>(),
        vec![true, true, true, false]
    );

    // `right` has a hidden child and one sibling, so it carries cousin space.
    assert_eq!(snap.height, 38.0 + 12.0);
    assert_eq!(snap.min_x, -99.0 - 60.0 - 13.0);
    assert_eq!(snap.width, 172.0 + 99.0 + 48.0 + 13.0);
    assert_eq!(snap.min_y, -25.0);

    let left = &snap.nodes[1];
    assert_eq!(left.side, Side::B);
    assert_eq!((left.x, left.y), (-159.0, -19.0));
    assert_eq!((left.outgoing.x, left.outgoing.y), (-172.0, 0.0));
}

#[test]
fn snapshot_round_trips_through_json() {
    let (tree, mut arranger) = tree_with_sizes();
    arranger.calculate(&tree).unwrap();
    let snap = arranger.snapshot(&tree).unwrap();

    let value = serde_json::to_value(&snap).unwrap();
    assert_eq!(value["nodes"][0]["id"], "root");
    assert_eq!(value["nodes"][1]["side"], "b");
    assert_eq!(value["nodes"][0]["incoming"], json!({ "x": 0.0, "y": 0.0 }));

    let back: LayoutSnapshot = serde_json::from_value(value).unwrap();
    assert_eq!(back, snap);
}
