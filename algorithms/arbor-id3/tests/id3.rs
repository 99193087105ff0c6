use approx::assert_abs_diff_eq;
use arbor::prelude::*;
use arbor_id3::{build, predict, Id3Tree, Termination};
use ndarray::array;

#[test]
fn tennis_tree_has_the_textbook_shape() -> Result<()> {
    let mut store = arbor_datasets::tennis();
    let tree = build(&mut store, 4, 2)?;

    let root = tree.root_node();
    assert_eq!(root.feature_name(), Some("outlook"));
    assert_eq!(tree.features(), vec![0, 2, 3]);
    assert_eq!(tree.max_depth(), 2);
    assert_eq!(tree.num_leaves(), 7);

    let children = root.children().unwrap();
    assert_eq!(children[0].feature_name(), Some("humidity"));
    assert_eq!(children[1].prediction(), Some(1));
    assert_eq!(children[1].termination(), Some(Termination::Pure));
    assert_eq!(children[2].feature_name(), Some("wind"));

    // sunny: 5 days, rain: 5 days, overcast: 4 days
    assert_eq!(children[0].samples(), 0..5);
    assert_eq!(children[1].samples(), 5..9);
    assert_eq!(children[2].samples(), 9..14);

    Ok(())
}

#[test]
fn tennis_tree_classifies_every_training_day() -> Result<()> {
    let mut store = arbor_datasets::tennis();
    let tree = Id3Tree::params().fit(&mut store)?;

    let predictions = tree.predict(store.records())?;
    assert_eq!(&predictions, store.targets());

    Ok(())
}

#[test]
fn tennis_tree_classifies_unseen_days() -> Result<()> {
    let mut store = arbor_datasets::tennis();
    let tree = build(&mut store, 4, 2)?;

    // sunny, cool, high humidity, strong wind
    assert_eq!(predict(&tree, &[0, 2, 0, 1])?, 0);
    // rain, hot, normal humidity, weak wind
    assert_eq!(predict(&tree, &[2, 0, 1, 0])?, 1);
    // overcast days are always good
    assert_eq!(predict(&tree, &[1, 1, 0, 1])?, 1);
    // humidity never takes value 2, the sunny majority decides
    assert_eq!(predict(&tree, &[0, 0, 2, 0])?, 0);
    // wind never takes value 2, the rain majority decides
    assert_eq!(predict(&tree, &[2, 2, 0, 2])?, 1);

    Ok(())
}

#[test]
fn importance_follows_the_weighted_gains() -> Result<()> {
    let mut store = arbor_datasets::tennis();
    let tree = Id3Tree::params().fit(&mut store)?;

    let importance = tree.feature_importance();
    assert_eq!(importance.len(), 4);
    assert_abs_diff_eq!(importance[1], 0.0);

    // humidity and wind each purify five days with entropy H(3/5, 2/5)
    assert_abs_diff_eq!(importance[2], importance[3], epsilon = 1e-12);
    assert!(importance[0] > 0.0 && importance[0] < importance[2]);
    assert_abs_diff_eq!(importance.iter().sum::<f64>(), 1.0, epsilon = 1e-10);

    Ok(())
}

#[test]
fn text_export_uses_the_table_header() -> Result<()> {
    let mut store = arbor_datasets::tennis();
    let tree = Id3Tree::params().fit(&mut store)?;

    let text = tree.export_to_text().to_string();
    let expected = "\
outlook
    = 0: humidity
        = 0: class 0
        = 1: class 1
        = 2: class 0 (no examples)
    = 1: class 1
    = 2: wind
        = 0: class 1
        = 1: class 0
        = 2: class 1 (no examples)
";
    assert_eq!(text, expected);

    Ok(())
}

#[test]
fn refitting_on_the_partitioned_store_gives_the_same_tree() -> Result<()> {
    let mut store = arbor_datasets::tennis();
    let first = Id3Tree::params().fit(&mut store)?;
    let order = store.clone();

    let second = Id3Tree::params().fit(&mut store)?;

    assert_eq!(store, order);
    assert_eq!(first.root_node(), second.root_node());

    Ok(())
}

#[test]
fn configured_shape_must_match_the_table() {
    let mut store = arbor_datasets::tennis();

    assert!(matches!(
        build(&mut store, 5, 2),
        Err(Error::LengthMismatch {
            expected: 5,
            actual: 4
        })
    ));
    assert!(matches!(
        predict(&build(&mut store, 4, 3).unwrap(), &[0, 0, 0]),
        Err(Error::LengthMismatch { .. })
    ));
    assert_eq!(
        Id3Tree::params()
            .fit(&mut store)
            .unwrap()
            .predict(&array![[1u8, 0, 0, 0]])
            .unwrap(),
        array![1usize]
    );
}

#[test]
fn held_out_days_are_scored() -> Result<()> {
    let (mut train, test) = arbor_datasets::tennis().split_at(10)?;
    let tree = Id3Tree::params().fit(&mut train)?;

    // sunny days split on temperature here, which gets the mild sunny day 11 wrong
    let cm = tree.evaluate(&test)?;
    assert_eq!(cm.total(), 4);
    assert_eq!(cm.correct(), 3);
    assert_abs_diff_eq!(cm.accuracy(), 0.75, epsilon = 1e-6);
    assert_eq!(cm.matrix(), &array![[1usize, 0], [1, 2]]);
    assert_abs_diff_eq!(cm.precision(), array![0.5f32, 1.0], epsilon = 1e-6);
    assert_abs_diff_eq!(cm.recall(), array![1.0f32, 2.0 / 3.0], epsilon = 1e-6);

    // the same numbers through the predictions
    let predictions = tree.predict(test.records())?;
    assert_eq!(predictions.confusion_matrix(&test)?, cm);

    Ok(())
}
