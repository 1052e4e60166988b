use async_graphql::parser::{
    parse_query,
    types::{DocumentOperations, OperationType},
};

/// Type of the operation a request would execute. `None` when the document does not parse or
/// the operation cannot be selected, in which case execution reports the problem itself.
pub fn requested_operation_type(query: &str, operation_name: Option<&str>) -> Option<OperationType> {
    let document = parse_query(query).ok()?;

    match &document.operations {
        DocumentOperations::Single(operation) => Some(operation.node.ty),
        DocumentOperations::Multiple(operations) => {
            let operation_name = operation_name?;

            operations
                .iter()
                .find(|(name, _)| name.as_str() == operation_name)
                .map(|(_, operation)| operation.node.ty)
        }
    }
}
