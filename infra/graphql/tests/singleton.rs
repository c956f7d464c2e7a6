use gamma_domain::config::{DEFAULT_GRAPHQL_ENDPOINT, GraphqlConfig};
use gamma_graphql::get_client;
use std::ptr;

#[test]
fn first_configuration_wins() {
    let first = get_client(None);
    assert_eq!(first.endpoint(), DEFAULT_GRAPHQL_ENDPOINT);

    let other = GraphqlConfig { endpoint: "http://elsewhere.test/graphql".into(), ..GraphqlConfig::default() };
    let second = get_client(Some(&other));

    assert!(ptr::eq(first, second));
    assert_eq!(second.endpoint(), DEFAULT_GRAPHQL_ENDPOINT);
}

#[test]
fn concurrent_callers_share_one_instance() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| ptr::from_ref(get_client(None)) as usize))
        .collect();

    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
}
