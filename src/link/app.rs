use crate::app::not_found;
use crate::link::schema::LinkSchema;
use crate::shared::util::config::GraphqlConfig;

use actix_web::{HttpResponse, web::Data, Result};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};


// Execute a query or mutation
pub async fn graphql(schema: Data<LinkSchema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}


// In-browser IDE, only served when enabled in config
pub async fn graphiql(graphql: Data<GraphqlConfig>) -> Result<HttpResponse> {
    if !graphql.playground {
        return not_found().await;
    }
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint(&graphql.path).finish()))
}
