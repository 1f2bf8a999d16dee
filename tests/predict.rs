use minitree::prelude::*;


fn conjunction() -> Sample {
    let rows = (0..16_u8)
        .map(|bits| {
            let mut row = (0..4).map(|k| (bits >> (3 - k)) & 1)
                .collect::<Vec<_>>();
            row.push(u8::from(bits == 15));
            row
        })
        .collect::<Vec<_>>();
    Sample::from_rows(vec!["a", "b", "c", "d", "class"], rows).unwrap()
}


#[test]
fn path_is_bounded_by_depth() {
    let sample = conjunction();
    let f = DecisionTreeBuilder::new(&sample)
        .gain_threshold(0.0)
        .build()
        .produce(&sample);

    // The last row sets every attribute.
    // The tree has a node at depth 3 on this path,
    // but only depths 0, 1 and 2 are visited.
    let path = f.predict_path(&sample[15]);
    assert_eq!(path, vec![0, 0, 0]);

    // `a = n` is a pure leaf right below the root.
    let path = f.predict_path(&sample[0]);
    assert_eq!(path, vec![0, 0]);

    let loss = zero_one_loss(&sample, &f);
    assert_eq!(loss, 1.0 / 16.0);
}


#[test]
fn leaf_root_predicts_majority() {
    let sample = Sample::from_rows(
        vec!["A", "class"],
        vec![vec![1, 1], vec![1, 1], vec![1, 0]],
    ).unwrap();
    let f = DecisionTreeBuilder::new(&sample).build().produce(&sample);

    assert!(f.root().is_leaf());
    for instance in sample.instances() {
        assert_eq!(f.predict_path(instance), vec![1]);
    }
    assert_eq!(f.predict_all(&sample), vec![1, 1, 1]);
}


#[test]
fn predictions_are_deterministic() {
    let sample = conjunction();
    let tree = DecisionTreeBuilder::new(&sample)
        .gain_threshold(0.0)
        .build();

    let f = tree.produce(&sample);
    let g = tree.produce(&sample);
    assert_eq!(f, g);
    assert_eq!(zero_one_loss(&sample, &f), zero_one_loss(&sample, &g));
}


#[test]
fn empty_sample_has_no_loss() {
    let train = conjunction();
    let empty = Sample::from_rows(
        vec!["a", "b", "c", "d", "class"],
        Vec::new(),
    ).unwrap();
    let f = DecisionTreeBuilder::new(&train).build().produce(&train);
    assert_eq!(zero_one_loss(&empty, &f), 0.0);
}
