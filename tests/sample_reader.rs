use minitree::prelude::*;
use minitree::research::Logger;

use std::env;
use std::path::PathBuf;


fn dataset(name: &str) -> PathBuf {
    let mut path = env::current_dir().unwrap();
    path.push("tests/dataset");
    path.push(name);
    path
}


fn read(name: &str) -> Sample {
    SampleReader::new()
        .file(dataset(name))
        .read()
        .unwrap()
}


#[test]
fn read_politicians() {
    let train = read("politicians_train.csv");
    let test = read("politicians_test.csv");

    assert_eq!(train.shape(), (48, 7));
    assert_eq!(test.shape(), (24, 7));
    assert_eq!(train.target_name(), "Party");
    assert_eq!(train.attribute_names()[0], "Anti_satellite_test_ban");

    let positive = train.target().into_iter().filter(|&y| y == 1).count();
    assert_eq!(positive, 25);
}


#[test]
fn missing_file_is_an_io_error() {
    let res = SampleReader::new()
        .file(dataset("no_such_file.csv"))
        .read();
    assert!(matches!(res, Err(SampleError::Io(_))), "got {res:?}.");
}


#[test]
fn politicians_tree() {
    let train = read("politicians_train.csv");
    let test = read("politicians_test.csv");

    let tree = DecisionTreeBuilder::new(&train).build();
    let (f, report) = Logger::new(&tree, &train, &test).run();

    let expected = "\
        [25+/23-]\n\
        Anti_satellite_test_ban = y: [20+/5-]\n\
        | Aid_to_nicaraguan_contras = y: [12+/0-]\n\
        | Aid_to_nicaraguan_contras = n: [8+/5-]\n\
        Anti_satellite_test_ban = n: [5+/18-]\n\
        | Aid_to_nicaraguan_contras = y: [5+/4-]\n\
        | Aid_to_nicaraguan_contras = n: [0+/14-]\n";
    let shown = format!("{}", f.display(train.attribute_names()));
    assert_eq!(shown, expected);

    assert_eq!(report.train_error, 9.0 / 48.0);
    assert_eq!(report.test_error, 8.0 / 24.0);
    assert!(f.root().depth() <= 3);
}


#[test]
fn politicians_inspect() {
    let train = read("politicians_train.csv");
    let res = inspect(&train);
    assert_eq!(res.error, 23.0 / 48.0);
    assert!((res.entropy - binary_entropy(25, 23)).abs() < 1e-12);
}


#[test]
fn header_only_inspect() {
    let sample = SampleReader::<&str>::new()
        .read_from("a,b,class\n".as_bytes())
        .unwrap();
    let res = inspect(&sample);
    assert_eq!(res.entropy, 0.0);
    assert_eq!(res.error, 0.0);
    assert_eq!(res.to_string(), "entropy: 0\nerror: 0");
}


#[test]
fn tree_survives_json() {
    let train = read("politicians_train.csv");
    let f = DecisionTreeBuilder::new(&train).build().produce(&train);

    let mut path = env::temp_dir();
    path.push(format!("minitree-{}.json", std::process::id()));
    f.to_json_file(&path).unwrap();
    let g = DecisionTreeClassifier::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(f, g);
    assert_eq!(f.predict_all(&train), g.predict_all(&train));
}


#[test]
fn tree_to_dot() {
    let train = read("politicians_train.csv");
    let f = DecisionTreeBuilder::new(&train).build().produce(&train);

    let mut path = env::temp_dir();
    path.push(format!("minitree-{}.dot", std::process::id()));
    f.to_dot_file(&path, train.attribute_names()).unwrap();
    let dot = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(dot.starts_with("graph DecisionTree {"));
    assert!(dot.contains("Anti_satellite_test_ban ?"));
    assert_eq!(dot.matches("shape = box").count(), f.root().leaves());
}
