use sivu::{Error, Ordering, QueryOptions};

#[test]
fn defaults_are_ascending_and_unsorted() {
    let q = QueryOptions::new(1, 15).unwrap();
    assert_eq!(q.order(), Ordering::Ascending);
    assert_eq!(q.sort_by(), "");
    assert_eq!(q.query_string(true), "?pageNumber=1&pageSize=15&order=asc");
}

#[test]
fn query_string_carries_all_set_fields_in_order() {
    let q = QueryOptions::new(1, 10)
        .unwrap()
        .with_order(Ordering::Ascending)
        .with_sort_by("name");
    assert_eq!(q.query_string(true), "?pageNumber=1&pageSize=10&order=asc&sort=name");
    assert_eq!(q.query_string(false), "pageNumber=1&pageSize=10&order=asc&sort=name");

    let q = QueryOptions::new(7, 50)
        .unwrap()
        .with_order(Ordering::Descending)
        .with_sort_by("lastName");
    assert_eq!(q.query_string(true), "?pageNumber=7&pageSize=50&order=desc&sort=lastName");
}

#[test]
fn query_string_does_not_encode_the_sort_field() {
    // Encoding reserved characters is the caller's responsibility.
    let q = QueryOptions::new(1, 10).unwrap().with_sort_by("first name");
    assert_eq!(q.query_string(false), "pageNumber=1&pageSize=10&order=asc&sort=first name");
}

#[test]
fn zero_page_size_is_valid() {
    let q = QueryOptions::new(1, 0).unwrap();
    assert_eq!(q.query_string(false), "pageNumber=1&pageSize=0&order=asc");
}

#[test]
fn page_number_below_one_is_rejected() {
    let err = QueryOptions::new(0, 10).unwrap_err();
    assert_eq!(err, Error::LessThan { subject: "Page number", min: 1 });
    assert_eq!(err.to_string(), "Page number can not be less than 1.");
}

#[test]
fn negative_page_size_is_rejected() {
    let err = QueryOptions::new(1, -1).unwrap_err();
    assert_eq!(err, Error::Negative("Page size"));
    assert_eq!(err.to_string(), "Page size can not be negative.");
}

#[test]
fn navigation_preserves_everything_but_the_page_number() {
    let q = QueryOptions::new(5, 20)
        .unwrap()
        .with_order(Ordering::Descending)
        .with_sort_by("createdAt");

    let next = q.next();
    assert_eq!(next.page_number(), 6);
    assert_eq!(next.page_size(), 20);
    assert_eq!(next.order(), Ordering::Descending);
    assert_eq!(next.sort_by(), "createdAt");

    let previous = q.previous();
    assert_eq!(previous.page_number(), 4);
    assert_eq!(previous.order(), Ordering::Descending);
    assert_eq!(previous.sort_by(), "createdAt");
}

#[test]
fn previous_at_page_one_is_a_no_op() {
    let q = QueryOptions::new(1, 20).unwrap().with_sort_by("name");
    assert_eq!(q.previous(), q);
    // next() has no boundary, the walk back from it returns here.
    assert_eq!(q.next().previous(), q);
}

#[test]
fn to_page_embeds_the_originating_options() {
    let q = QueryOptions::new(1, 2).unwrap().with_sort_by("name");
    let page = q.to_page(vec!["Ada".to_string(), "Grace".to_string()], 2, 3).unwrap();
    assert_eq!(page.size(), 2);
    assert_eq!(page.page_number(), 1);
    assert!(page.is_first_page());
    assert!(!page.is_last_page());
    assert_eq!(page.query_options().sort_by(), "name");
}
