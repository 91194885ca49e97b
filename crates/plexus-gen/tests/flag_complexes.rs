use std::collections::BTreeSet;

use plexus_core::rng::RngHandle;
use plexus_gen::{flag_complex, flag_complex_d2, FlagComplexOptions};
use plexus_graph::{complete_graph, find_triangles, Graph};

fn bowtie_with_tail() -> Graph<u32> {
    Graph::from_edges([(0, 1), (1, 2), (0, 2), (2, 3), (3, 4), (2, 4), (4, 5), (6, 7)]).unwrap()
}

#[test]
fn d2_fills_every_triangle() {
    let graph = bowtie_with_tail();
    let triangles = find_triangles(&graph).unwrap();
    assert_eq!(triangles.len(), 2);

    let complex = flag_complex_d2(&graph, None, &mut RngHandle::from_seed(0)).unwrap();
    assert_eq!(complex.simplices_of_order(2), triangles);
    assert_eq!(complex.simplices_of_order(1).len(), graph.num_edges());
    assert_eq!(complex.simplices_of_order(0).len(), graph.num_nodes());
    assert_eq!(complex.max_order(), Some(2));
}

#[test]
fn d2_probability_extremes() {
    let graph = complete_graph(5);
    let none = flag_complex_d2(&graph, Some(0.0), &mut RngHandle::from_seed(4)).unwrap();
    assert!(none.simplices_of_order(2).is_empty());
    let all = flag_complex_d2(&graph, Some(1.0), &mut RngHandle::from_seed(4)).unwrap();
    assert_eq!(all.simplices_of_order(2).len(), 10);
    assert!(flag_complex_d2(&graph, Some(1.1), &mut RngHandle::from_seed(4)).is_err());
}

#[test]
fn default_options_fill_up_to_triangles() {
    let graph = complete_graph(5);
    let complex =
        flag_complex(&graph, &FlagComplexOptions::default(), &mut RngHandle::from_seed(0)).unwrap();
    assert_eq!(complex.simplices_of_order(2).len(), 10);
    assert!(complex.simplices_of_order(3).is_empty());
}

#[test]
fn promotion_uses_probability_of_matching_order() {
    let graph = complete_graph(4);
    let options = FlagComplexOptions::up_to(Some(3)).with_probabilities(vec![0.0, 1.0]);
    let complex = flag_complex(&graph, &options, &mut RngHandle::from_seed(0)).unwrap();
    assert_eq!(complex.simplices_of_order(3).len(), 1);
    assert_eq!(complex.simplices_of_order(2).len(), 4);

    let options = FlagComplexOptions::up_to(Some(3)).with_probabilities(vec![1.0, 0.0]);
    let complex = flag_complex(&graph, &options, &mut RngHandle::from_seed(0)).unwrap();
    assert!(complex.simplices_of_order(3).is_empty());
    assert!(complex.simplices_of_order(2).is_empty());
}

#[test]
fn truncated_cliques_are_promoted_at_max_order() {
    let graph = complete_graph(5);
    let options = FlagComplexOptions::up_to(Some(2)).with_probabilities(vec![1.0]);
    let complex = flag_complex(&graph, &options, &mut RngHandle::from_seed(0)).unwrap();
    assert_eq!(complex.simplices_of_order(2).len(), 10);
    assert_eq!(complex.max_order(), Some(2));
}

#[test]
fn probabilities_beyond_max_order_are_ignored() {
    let graph = complete_graph(4);
    let options = FlagComplexOptions::up_to(Some(2)).with_probabilities(vec![0.0, 1.0]);
    let complex = flag_complex(&graph, &options, &mut RngHandle::from_seed(0)).unwrap();
    assert_eq!(complex.max_order(), Some(1));
}

#[test]
fn small_cliques_survive_truncation() {
    let graph = bowtie_with_tail();
    let options = FlagComplexOptions::up_to(Some(3)).with_probabilities(vec![1.0, 1.0]);
    let complex = flag_complex(&graph, &options, &mut RngHandle::from_seed(0)).unwrap();
    assert!(complex.contains(&BTreeSet::from([0, 1, 2])));
    assert!(complex.contains(&BTreeSet::from([6, 7])));
    assert_eq!(complex.simplices_of_order(2).len(), 2);
}

#[test]
fn invalid_promotion_probability_is_rejected() {
    let graph = complete_graph(3);
    let options = FlagComplexOptions::default().with_probabilities(vec![f64::NAN]);
    let err = flag_complex(&graph, &options, &mut RngHandle::from_seed(0)).unwrap_err();
    assert_eq!(err.info().code, "invalid-probability");
}

#[test]
fn options_deserialize_with_defaults() {
    let options: FlagComplexOptions = serde_json::from_str(r#"{"ps": [0.5]}"#).unwrap();
    assert_eq!(options.max_order, Some(2));
    assert_eq!(options.ps, vec![0.5]);

    let options: FlagComplexOptions = serde_json::from_str(r#"{"max_order": null}"#).unwrap();
    assert_eq!(options, FlagComplexOptions::up_to(None));
}
