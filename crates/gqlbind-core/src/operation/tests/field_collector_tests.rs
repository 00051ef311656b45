use crate::ast;
use crate::operation::FieldCollector;
use crate::operation::OperationKind;
use crate::operation::Request;
use crate::operation::Variables;
use serde_json::json;

fn collect_root(
    query: &str,
    variables: &Variables,
    implementors: &[&str],
) -> Vec<(String, String)> {
    let request = Request::parse(query).unwrap();
    let operation = request.select_operation().unwrap();
    assert_eq!(operation.kind(), OperationKind::Query);

    let collector = FieldCollector::new(request.document(), variables);
    collector.collect(&[operation.selection_set()], implementors)
        .into_iter()
        .map(|field| (field.response_key().to_string(), field.name().to_string()))
        .collect()
}

fn keys(fields: Vec<(String, String)>) -> Vec<String> {
    fields.into_iter().map(|(key, _)| key).collect()
}

mod directives {
    use super::*;

    #[test]
    fn skip_and_include_literals() {
        let fields = collect_root(
            "{ a @skip(if: true) b @skip(if: false) c @include(if: false) d @include(if: true) }",
            &Variables::new(),
            &["Query"],
        );

        assert_eq!(keys(fields), vec!["b", "d"]);
    }

    #[test]
    fn skip_and_include_compose_with_and() {
        let fields = collect_root(
            "{ a @skip(if: false) @include(if: false) b @skip(if: false) @include(if: true) }",
            &Variables::new(),
            &["Query"],
        );

        assert_eq!(keys(fields), vec!["b"]);
    }

    #[test]
    fn directive_conditions_from_variables() {
        let variables = Variables::new()
            .with("hide", json!(true))
            .with("show", json!(true));
        let fields = collect_root(
            "query Q($hide: Boolean!, $show: Boolean!) { a @skip(if: $hide) b @include(if: $show) }",
            &variables,
            &["Query"],
        );

        assert_eq!(keys(fields), vec!["b"]);
    }

    #[test]
    fn same_key_with_different_conditions_yields_one_entry() {
        let fields = collect_root(
            "{ todo { id @skip(if: true) id @include(if: true) text } }",
            &Variables::new(),
            &["Query"],
        );
        assert_eq!(keys(fields), vec!["todo"]);

        let request = Request::parse(
            "{ todo { id @skip(if: true) id @include(if: true) text } }",
        ).unwrap();
        let variables = Variables::new();
        let collector = FieldCollector::new(request.document(), &variables);
        let roots = collector.collect(
            &[request.select_operation().unwrap().selection_set()],
            &["Query"],
        );
        let nested = collector.collect(roots[0].selections(), &["Todo"]);

        let nested_keys = nested.iter().map(|field| field.response_key()).collect::<Vec<_>>();
        assert_eq!(nested_keys, vec!["id", "text"]);
    }
}

mod merging {
    use super::*;

    #[test]
    fn aliases_become_response_keys() {
        let fields = collect_root(
            "{ first: todo(id: 1) { id } second: todo(id: 2) { id } }",
            &Variables::new(),
            &["Query"],
        );

        assert_eq!(fields, vec![
            ("first".to_string(), "todo".to_string()),
            ("second".to_string(), "todo".to_string()),
        ]);
    }

    #[test]
    fn same_key_merges_sub_selections_in_first_appearance_order() {
        let request = Request::parse("{ b a { x } c b a { y x } }").unwrap();
        let variables = Variables::new();
        let collector = FieldCollector::new(request.document(), &variables);
        let roots = collector.collect(
            &[request.select_operation().unwrap().selection_set()],
            &["Query"],
        );

        let root_keys = roots.iter().map(|field| field.response_key()).collect::<Vec<_>>();
        assert_eq!(root_keys, vec!["b", "a", "c"]);
        assert_eq!(roots[1].selections().len(), 2);

        let nested = collector.collect(roots[1].selections(), &["A"]);
        let nested_keys = nested.iter().map(|field| field.response_key()).collect::<Vec<_>>();
        assert_eq!(nested_keys, vec!["x", "y"]);
    }

    #[test]
    fn collection_is_idempotent() {
        let query = concat!(
            "query { ...F todo(id: 1) { id } ... on Query { todo(id: 1) { text } } }\n",
            "fragment F on Query { todos { id } }\n",
        );
        let request = Request::parse(query).unwrap();
        let variables = Variables::new();
        let collector = FieldCollector::new(request.document(), &variables);
        let root = [request.select_operation().unwrap().selection_set()];

        let first = collector.collect(&root, &["Query"]);
        let second = collector.collect(&root, &["Query"]);

        assert_eq!(first, second);
        assert_eq!(
            first.iter().map(|field| field.response_key()).collect::<Vec<_>>(),
            vec!["todos", "todo"],
        );
    }
}

mod fragments {
    use super::*;

    #[test]
    fn fragments_apply_only_to_matching_implementors() {
        let query = concat!(
            "{ ... on Todo { text } ... on Node { id } ...Other ... { always } }\n",
            "fragment Other on User { name }\n",
        );

        let fields = collect_root(query, &Variables::new(), &["Todo", "Node"]);

        assert_eq!(keys(fields), vec!["text", "id", "always"]);
    }

    #[test]
    fn recursive_fragment_spreads_terminate() {
        let query = concat!(
            "{ ...A }\n",
            "fragment A on Query { a ...B }\n",
            "fragment B on Query { b ...A }\n",
        );

        let fields = collect_root(query, &Variables::new(), &["Query"]);

        assert_eq!(keys(fields), vec!["a", "b"]);
    }

    #[test]
    fn skipped_fragment_spread() {
        let query = concat!(
            "{ x ...A @skip(if: true) }\n",
            "fragment A on Query { a }\n",
        );

        let fields = collect_root(query, &Variables::new(), &["Query"]);

        assert_eq!(keys(fields), vec!["x"]);
    }
}

mod arguments {
    use super::*;

    #[test]
    fn variables_are_substituted_and_unset_ones_dropped() {
        let request = Request::parse(
            "query($id: Int, $missing: String) { todo(id: $id, text: $missing, done: DONE, tags: [\"a\"]) }",
        ).unwrap();
        let variables = Variables::new().with("id", json!(7));
        let collector = FieldCollector::new(request.document(), &variables);
        let fields = collector.collect(
            &[request.select_operation().unwrap().selection_set()],
            &["Query"],
        );

        let args = fields[0].arguments();
        assert_eq!(args.get("id"), Some(&json!(7)));
        assert_eq!(args.get("text"), None);
        assert_eq!(args.get("done"), Some(&json!("DONE")));
        assert_eq!(args.get("tags"), Some(&json!(["a"])));
    }

    #[test]
    fn first_occurrence_supplies_position() {
        let request = Request::parse("{\n  a\n  a\n}").unwrap();
        let variables = Variables::new();
        let collector = FieldCollector::new(request.document(), &variables);
        let fields = collector.collect(
            &[request.select_operation().unwrap().selection_set()],
            &["Query"],
        );

        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].position(), ast::Pos { line: 2, column: 3 });
    }
}
