use crate::commands::bind::render_report;
use crate::output_utils;
use gqlbind_core::binder::Binder;
use gqlbind_core::binder::BoundSchema;
use gqlbind_core::binder::HostType;
use gqlbind_core::binder::Member;
use gqlbind_core::binder::StaticCatalog;
use gqlbind_core::schema::SchemaBuilder;
use std::sync::Arc;

fn bind(sdl: &str, catalog: &StaticCatalog) -> BoundSchema {
    let schema = SchemaBuilder::new().load_str(None, sdl).unwrap().build().unwrap();
    Binder::new(Arc::new(schema), catalog).bind().unwrap()
}

fn todo_catalog() -> StaticCatalog {
    StaticCatalog::new()
        .with_type("Todo", vec![
            Member::field("id", HostType::named("String")),
            Member::field("text", HostType::named("String")),
        ])
}

mod report {
    use super::*;

    #[test]
    fn lists_fields_and_diagnostics() {
        let bound = bind(
            "type Todo { id: ID! text: String! } type Query { todos: [Todo!]! }",
            &todo_catalog(),
        );
        let report = render_report(&bound);
        let lines: Vec<&str> = report.lines().collect();

        assert!(lines.contains(&"Todo (model `Todo`)"));
        assert!(lines.contains(&"  id: direct member `id`"));
        assert!(lines.contains(&"  todos: user resolver `todos`"));
        assert!(lines.contains(&"  * implementation type Query for Query was not found"));
        assert_eq!(lines.last(), Some(&"1 field(s) need a hand-written resolver."));
        assert!(!report.ends_with('\n'));
    }

    #[test]
    fn clean_binding_ends_with_a_check() {
        let catalog = todo_catalog().with_type("Query", vec![
            Member::method("todos", vec![], vec![HostType::list(HostType::named("Todo"))]),
        ]);
        let bound = bind("type Todo { id: ID! text: String! } type Query { todos: [Todo!]! }", &catalog);
        let report = render_report(&bound);

        assert!(!report.contains("__"));
        assert_eq!(
            report.lines().last(),
            Some(format!("{} Every field bound to a member.", output_utils::GREEN_CHECK).as_str()),
        );
    }
}
