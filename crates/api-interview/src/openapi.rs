use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::questions::list,
        crate::routes::analyze::analyze,
    ),
    components(
        schemas(
            crate::routes::questions::QuestionsResponse,
            crate::routes::analyze::AnalyzeRequest,
            crate::routes::analyze::AnalyzeResponse,
            crate::error::ErrorDetail,
            greenroom_interview::FillerReport,
            greenroom_interview::Severity,
            greenroom_interview::Feedback,
            greenroom_interview::OverallRating,
        )
    ),
    tags(
        (name = "interview", description = "Interview questions and transcript analysis")
    )
)]
struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
