// src/web/mod.rs

pub mod cookies;
pub mod endpoints;
pub mod guards;
pub mod handlers;

use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{CookieJar, Header, Status};
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use std::net::IpAddr;
use tracing::{error, info, warn};

use crate::config::ApiConfig;
use crate::core::backend_client::REQUEST_ID_HEADER;
use crate::core::{BackendClient, Credentials, InboundBody, Proxy};
use crate::types::{Envelope, ProxyReply, UserKind};
use crate::web::guards::{QueryParams, RequestId};

const ALLOWED_HEADERS: &str = "Content-Type, Authorization, X-Request-Id";

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        // Credentialed requests need the concrete origin echoed back
        let origin = request.headers().get_one("Origin").unwrap_or("*").to_string();
        response.set_header(Header::new("Access-Control-Allow-Origin", origin));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, PATCH, OPTIONS",
        ));
        // A literal `*` is not honored on credentialed preflights
        let allowed = request
            .headers()
            .get_one("Access-Control-Request-Headers")
            .filter(|requested| !requested.trim().is_empty())
            .unwrap_or(ALLOWED_HEADERS)
            .to_string();
        response.set_header(Header::new("Access-Control-Allow-Headers", allowed));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
        response.set_header(Header::new("Vary", "Origin"));
    }
}

/// Echoes the request id used for upstream calls and logs
pub struct RequestIdHeader;

#[rocket::async_trait]
impl Fairing for RequestIdHeader {
    fn info(&self) -> Info {
        Info {
            name: "Tag responses with the request id",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new(REQUEST_ID_HEADER, RequestId::of(request)));
    }
}

// Job seeker routes

#[post("/seeker/auth/login", data = "<body>")]
pub async fn seeker_login(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
) -> ProxyReply {
    handlers::forward(proxy, &endpoints::SEEKER_LOGIN, &credentials, query, body).await
}

#[post("/seeker/auth/register", data = "<body>")]
pub async fn seeker_register(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
) -> ProxyReply {
    handlers::forward(proxy, &endpoints::SEEKER_REGISTER, &credentials, query, body).await
}

#[post("/seeker/auth/forgot-password", data = "<body>")]
pub async fn seeker_forgot_password(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
) -> ProxyReply {
    handlers::forward(
        proxy,
        &endpoints::SEEKER_FORGOT_PASSWORD,
        &credentials,
        query,
        body,
    )
    .await
}

#[post("/seeker/auth/reset-password", data = "<body>")]
pub async fn seeker_reset_password(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
) -> ProxyReply {
    handlers::forward(
        proxy,
        &endpoints::SEEKER_RESET_PASSWORD,
        &credentials,
        query,
        body,
    )
    .await
}

#[get("/seeker/jobs/get_saved_jobs")]
pub async fn seeker_saved_jobs(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
) -> ProxyReply {
    handlers::fetch(proxy, &endpoints::SEEKER_SAVED_JOBS, &credentials, query).await
}

#[post("/seeker/jobs/save_job", data = "<body>")]
pub async fn seeker_save_job(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
) -> ProxyReply {
    handlers::forward(proxy, &endpoints::SEEKER_SAVE_JOB, &credentials, query, body).await
}

#[post("/seeker/jobs/unsave_job", data = "<body>")]
pub async fn seeker_unsave_job(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
) -> ProxyReply {
    handlers::forward(proxy, &endpoints::SEEKER_UNSAVE_JOB, &credentials, query, body).await
}

#[get("/seeker/jobs/get_applied_jobs")]
pub async fn seeker_applied_jobs(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
) -> ProxyReply {
    handlers::fetch(proxy, &endpoints::SEEKER_APPLIED_JOBS, &credentials, query).await
}

#[post("/seeker/profile/apply_job", data = "<body>")]
pub async fn seeker_apply_job(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
) -> ProxyReply {
    handlers::forward(proxy, &endpoints::SEEKER_APPLY_JOB, &credentials, query, body).await
}

#[get("/seeker/profile/get_profile")]
pub async fn seeker_profile(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
) -> ProxyReply {
    handlers::fetch(proxy, &endpoints::SEEKER_PROFILE, &credentials, query).await
}

#[post("/seeker/profile/update_profile", data = "<body>")]
pub async fn seeker_update_profile(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
) -> ProxyReply {
    handlers::forward(
        proxy,
        &endpoints::SEEKER_UPDATE_PROFILE,
        &credentials,
        query,
        body,
    )
    .await
}

#[post("/seeker/profile/upload_resume", data = "<body>")]
pub async fn seeker_upload_resume(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
) -> ProxyReply {
    handlers::forward(
        proxy,
        &endpoints::SEEKER_UPLOAD_RESUME,
        &credentials,
        query,
        body,
    )
    .await
}

#[post("/seeker/resume/parse", data = "<body>")]
pub async fn seeker_parse_resume(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
) -> ProxyReply {
    handlers::forward(proxy, &endpoints::SEEKER_PARSE_RESUME, &credentials, query, body).await
}

// Employer routes

#[post("/employer/auth/login", data = "<body>")]
pub async fn employer_login(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
    jar: &CookieJar<'_>,
) -> ProxyReply {
    handlers::employer_login_handler(
        proxy,
        &endpoints::EMPLOYER_LOGIN,
        &credentials,
        query,
        body,
        jar,
    )
    .await
}

#[post("/employer/auth/register", data = "<body>")]
pub async fn employer_register(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
) -> ProxyReply {
    handlers::forward(proxy, &endpoints::EMPLOYER_REGISTER, &credentials, query, body).await
}

#[post("/employer/auth/logout", data = "<body>")]
pub async fn employer_logout(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
    jar: &CookieJar<'_>,
) -> ProxyReply {
    handlers::employer_logout_handler(
        proxy,
        &endpoints::EMPLOYER_LOGOUT,
        &credentials,
        query,
        body,
        jar,
    )
    .await
}

#[get("/employer/profile")]
pub async fn employer_profile(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    jar: &CookieJar<'_>,
) -> ProxyReply {
    handlers::employer_scoped_handler(proxy, &endpoints::EMPLOYER_PROFILE, &credentials, query, jar)
        .await
}

#[get("/employer/jobs")]
pub async fn employer_jobs(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    jar: &CookieJar<'_>,
) -> ProxyReply {
    handlers::employer_scoped_handler(proxy, &endpoints::EMPLOYER_JOBS, &credentials, query, jar)
        .await
}

#[post("/employer/jobs/post_job", data = "<body>")]
pub async fn employer_post_job(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
) -> ProxyReply {
    handlers::forward(proxy, &endpoints::EMPLOYER_POST_JOB, &credentials, query, body).await
}

#[post("/employer/jobs/update_job", data = "<body>")]
pub async fn employer_update_job(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
) -> ProxyReply {
    handlers::forward(proxy, &endpoints::EMPLOYER_UPDATE_JOB, &credentials, query, body).await
}

#[post("/employer/jobs/delete_job", data = "<body>")]
pub async fn employer_delete_job(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
) -> ProxyReply {
    handlers::forward(proxy, &endpoints::EMPLOYER_DELETE_JOB, &credentials, query, body).await
}

#[get("/employer/applications")]
pub async fn employer_applications(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
) -> ProxyReply {
    handlers::fetch(proxy, &endpoints::EMPLOYER_APPLICATIONS, &credentials, query).await
}

#[post("/employer/applications/update_status", data = "<body>")]
pub async fn employer_update_application(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
) -> ProxyReply {
    handlers::forward(
        proxy,
        &endpoints::EMPLOYER_UPDATE_APPLICATION,
        &credentials,
        query,
        body,
    )
    .await
}

// Admin routes

#[post("/admin/auth/login", data = "<body>")]
pub async fn admin_login(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
    jar: &CookieJar<'_>,
) -> ProxyReply {
    handlers::admin_session_start_handler(
        proxy,
        &endpoints::ADMIN_LOGIN,
        &credentials,
        query,
        body,
        jar,
    )
    .await
}

#[post("/admin/auth/verify-otp", data = "<body>")]
pub async fn admin_verify_otp(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
    jar: &CookieJar<'_>,
) -> ProxyReply {
    handlers::admin_session_start_handler(
        proxy,
        &endpoints::ADMIN_VERIFY_OTP,
        &credentials,
        query,
        body,
        jar,
    )
    .await
}

#[post("/admin/auth/register", data = "<body>")]
pub async fn admin_register(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
) -> ProxyReply {
    handlers::forward(proxy, &endpoints::ADMIN_REGISTER, &credentials, query, body).await
}

#[post("/admin/auth/forgot-password", data = "<body>")]
pub async fn admin_forgot_password(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
) -> ProxyReply {
    handlers::forward(
        proxy,
        &endpoints::ADMIN_FORGOT_PASSWORD,
        &credentials,
        query,
        body,
    )
    .await
}

#[post("/admin/auth/logout")]
pub async fn admin_logout(jar: &CookieJar<'_>) -> ProxyReply {
    handlers::admin_logout_handler(jar).await
}

#[get("/admin/auth/session")]
pub async fn admin_session(jar: &CookieJar<'_>) -> ProxyReply {
    handlers::admin_session_handler(jar).await
}

#[get("/admin/dashboard/stats")]
pub async fn admin_dashboard_stats(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
) -> ProxyReply {
    handlers::fetch(proxy, &endpoints::ADMIN_DASHBOARD_STATS, &credentials, query).await
}

#[get("/admin/users/employers")]
pub async fn admin_employers(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
) -> ProxyReply {
    handlers::admin_users_handler(
        proxy,
        &endpoints::ADMIN_EMPLOYERS,
        UserKind::Employer,
        &credentials,
        query,
    )
    .await
}

#[get("/admin/users/jobseekers")]
pub async fn admin_jobseekers(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
) -> ProxyReply {
    handlers::admin_users_handler(
        proxy,
        &endpoints::ADMIN_JOBSEEKERS,
        UserKind::Jobseeker,
        &credentials,
        query,
    )
    .await
}

#[post("/admin/users/suspend", data = "<body>")]
pub async fn admin_suspend_user(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
) -> ProxyReply {
    handlers::forward(proxy, &endpoints::ADMIN_SUSPEND_USER, &credentials, query, body).await
}

#[get("/admin/jobs")]
pub async fn admin_jobs(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
) -> ProxyReply {
    handlers::fetch(proxy, &endpoints::ADMIN_JOBS, &credentials, query).await
}

#[get("/admin/payroll")]
pub async fn admin_payroll(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
) -> ProxyReply {
    handlers::fetch(proxy, &endpoints::ADMIN_PAYROLL, &credentials, query).await
}

#[post("/admin/payroll/calculate", data = "<body>")]
pub async fn admin_calculate_payroll(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
) -> ProxyReply {
    handlers::forward(
        proxy,
        &endpoints::ADMIN_CALCULATE_PAYROLL,
        &credentials,
        query,
        body,
    )
    .await
}

// Public job board

#[get("/jobs")]
pub async fn list_jobs(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
) -> ProxyReply {
    handlers::fetch(proxy, &endpoints::JOBS_LIST, &credentials, query).await
}

#[get("/jobs/<id>")]
pub async fn job_details(
    id: &str,
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
) -> ProxyReply {
    handlers::job_details_handler(proxy, &endpoints::JOB_DETAILS, id, &credentials, query).await
}

// Driver, teacher and student dashboards

#[post("/driver/time/clock_in", data = "<body>")]
pub async fn driver_clock_in(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
) -> ProxyReply {
    handlers::forward(proxy, &endpoints::DRIVER_CLOCK_IN, &credentials, query, body).await
}

#[post("/driver/time/clock_out", data = "<body>")]
pub async fn driver_clock_out(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
    body: InboundBody,
) -> ProxyReply {
    handlers::forward(proxy, &endpoints::DRIVER_CLOCK_OUT, &credentials, query, body).await
}

#[get("/driver/time/entries")]
pub async fn driver_time_entries(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
) -> ProxyReply {
    handlers::fetch(proxy, &endpoints::DRIVER_TIME_ENTRIES, &credentials, query).await
}

#[get("/teacher/courses")]
pub async fn teacher_courses(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
) -> ProxyReply {
    handlers::fetch(proxy, &endpoints::TEACHER_COURSES, &credentials, query).await
}

#[get("/student/enrollments")]
pub async fn student_enrollments(
    proxy: &State<Proxy>,
    credentials: Credentials,
    query: QueryParams,
) -> ProxyReply {
    handlers::fetch(proxy, &endpoints::STUDENT_ENROLLMENTS, &credentials, query).await
}

// Local routes

#[get("/layout?<path>")]
pub async fn layout(path: Option<String>) -> ProxyReply {
    handlers::layout_handler(path.as_deref()).await
}

#[get("/health")]
pub async fn health(proxy: &State<Proxy>) -> ProxyReply {
    handlers::health_handler(proxy).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> ProxyReply {
    ProxyReply::bad_request("Invalid request format")
}

#[rocket::catch(404)]
pub fn not_found(req: &Request<'_>) -> ProxyReply {
    warn!("No route for {} {}", req.method(), req.uri());
    ProxyReply::from_envelope(Status::NotFound, Envelope::failure("Not found"))
}

#[rocket::catch(413)]
pub fn payload_too_large() -> ProxyReply {
    ProxyReply::from_envelope(
        Status::PayloadTooLarge,
        Envelope::failure("Request body too large"),
    )
}

#[rocket::catch(422)]
pub fn unprocessable() -> ProxyReply {
    ProxyReply::from_envelope(
        Status::UnprocessableEntity,
        Envelope::failure("Invalid request format"),
    )
}

#[rocket::catch(500)]
pub fn internal_error() -> ProxyReply {
    ProxyReply::internal_error()
}

/// Mount every route and catcher onto `rocket`
fn assemble(rocket: Rocket<Build>, config: ApiConfig) -> Result<Rocket<Build>> {
    let proxy = Proxy::new(BackendClient::new(&config)?);

    Ok(rocket
        .attach(Cors)
        .attach(RequestIdHeader)
        .manage(config)
        .manage(proxy)
        .register(
            "/api",
            catchers![
                bad_request,
                not_found,
                payload_too_large,
                unprocessable,
                internal_error
            ],
        )
        .mount(
            "/api",
            routes![
                seeker_login,
                seeker_register,
                seeker_forgot_password,
                seeker_reset_password,
                seeker_saved_jobs,
                seeker_save_job,
                seeker_unsave_job,
                seeker_applied_jobs,
                seeker_apply_job,
                seeker_profile,
                seeker_update_profile,
                seeker_upload_resume,
                seeker_parse_resume,
                employer_login,
                employer_register,
                employer_logout,
                employer_profile,
                employer_jobs,
                employer_post_job,
                employer_update_job,
                employer_delete_job,
                employer_applications,
                employer_update_application,
                admin_login,
                admin_verify_otp,
                admin_register,
                admin_forgot_password,
                admin_logout,
                admin_session,
                admin_dashboard_stats,
                admin_employers,
                admin_jobseekers,
                admin_suspend_user,
                admin_jobs,
                admin_payroll,
                admin_calculate_payroll,
                list_jobs,
                job_details,
                driver_clock_in,
                driver_clock_out,
                driver_time_entries,
                teacher_courses,
                student_enrollments,
                layout,
                health,
                options,
            ],
        ))
}

/// Rocket instance with default figment, used by tests and embedders
pub fn build_rocket(config: ApiConfig) -> Result<Rocket<Build>> {
    assemble(rocket::build(), config)
}

// Main server start function
pub async fn start_web_server(config: ApiConfig, address: IpAddr, port: u16) -> Result<()> {
    info!("Starting career portal BFF");
    info!("Environment: {}", config.environment);
    info!("Backend: {}", config.backend_url);
    info!("Server: http://{}:{}", address, port);

    let figment = rocket::Config::figment()
        .merge(("address", address))
        .merge(("port", port));

    if let Err(e) = assemble(rocket::custom(figment), config)?.launch().await {
        error!("Server stopped with error: {}", e);
        return Err(anyhow::anyhow!("Rocket failed: {}", e));
    }

    Ok(())
}
