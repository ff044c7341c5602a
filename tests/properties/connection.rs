//! Property tests for connection string parsing.

use proptest::prelude::*;

use hippo::domain::value_objects::ClusterConnection;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: context and namespace are recovered from the canonical form.
    #[test]
    fn property_canonical_connection_round_trips_flags(
        context in "[a-z0-9][a-z0-9-]{0,19}",
        namespace in "[a-z0-9][a-z0-9-]{0,19}",
    ) {
        let raw = format!("--context {} --namespace {}", context, namespace);
        let connection = ClusterConnection::parse(&raw).unwrap();

        prop_assert_eq!(connection.as_str(), raw.as_str());
        prop_assert_eq!(connection.args().len(), 4);
        prop_assert_eq!(connection.context(), Some(context.as_str()));
        prop_assert_eq!(connection.namespace(), Some(namespace.as_str()));
    }

    /// PROPERTY: whitespace-only strings are always rejected.
    #[test]
    fn property_blank_connection_is_rejected(raw in "[ \\t\\n]{0,16}") {
        prop_assert!(ClusterConnection::parse(&raw).is_err());
    }

    /// PROPERTY: parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(raw in "(?s).{0,128}") {
        let _ = ClusterConnection::parse(&raw);
    }
}
