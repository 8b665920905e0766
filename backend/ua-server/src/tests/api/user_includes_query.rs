use crate::UserIncludesQuery;

use ua_core::UserIncludes;

#[test]
fn test_only_literal_true_turns_a_collection_on() {
    let includes = UserIncludes::from(UserIncludesQuery {
        email: Some("true".to_string()),
        telephone: Some("1".to_string()),
        address: None,
    });

    assert!(includes.email);
    assert!(!includes.telephone);
    assert!(!includes.address);
}
