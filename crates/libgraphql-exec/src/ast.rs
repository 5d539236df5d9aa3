pub mod query {
    pub type Definition = graphql_parser::query::Definition<'static, String>;
    pub type Document = graphql_parser::query::Document<'static, String>;
    pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
    pub type Type = graphql_parser::query::Type<'static, String>;
}
