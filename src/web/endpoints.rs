// src/web/endpoints.rs
//! Backend endpoints behind each BFF route

use reqwest::Method;

use crate::core::proxy::{required, Encoding, Endpoint, Required};

const JOBSEEKER_ID: Required = required("jobseeker_id", "Jobseeker ID is required");
const JOB_ID: Required = required("job_id", "Job ID is required");
const EMPLOYER_ID: Required = required("employer_id", "Employer ID is required");
const EMAIL: Required = required("email", "Email is required");
const PASSWORD: Required = required("password", "Password is required");
const FULL_NAME: Required = required("full_name", "Full name is required");
const TOKEN: Required = required("token", "Token is required");
const COMPANY_NAME: Required = required("company_name", "Company name is required");
const TITLE: Required = required("title", "Job title is required");
const APPLICATION_ID: Required = required("application_id", "Application ID is required");
const STATUS: Required = required("status", "Status is required");
const ADMIN_ID: Required = required("admin_id", "Admin ID is required");
const OTP: Required = required("otp", "OTP is required");
const NAME: Required = required("name", "Name is required");
const USER_ID: Required = required("user_id", "User ID is required");
const USER_TYPE: Required = required("user_type", "User type is required");
const PERIOD_START: Required = required("period_start", "Period start is required");
const PERIOD_END: Required = required("period_end", "Period end is required");
const TEACHER_ID: Required = required("teacher_id", "Teacher ID is required");
const STUDENT_ID: Required = required("student_id", "Student ID is required");

const fn post_form(upstream: &'static str, required: &'static [Required]) -> Endpoint {
    Endpoint {
        method: Method::POST,
        upstream,
        encoding: Encoding::Form,
        required,
    }
}

const fn post_json(upstream: &'static str, required: &'static [Required]) -> Endpoint {
    Endpoint {
        method: Method::POST,
        upstream,
        encoding: Encoding::Json,
        required,
    }
}

const fn get(upstream: &'static str, required: &'static [Required]) -> Endpoint {
    Endpoint {
        method: Method::GET,
        upstream,
        encoding: Encoding::Query,
        required,
    }
}

// Job seekers
pub const SEEKER_LOGIN: Endpoint = post_form("/jobseeker/login.php", &[EMAIL, PASSWORD]);
pub const SEEKER_REGISTER: Endpoint = post_form(
    "/jobseeker/register.php",
    &[FULL_NAME, EMAIL, PASSWORD],
);
pub const SEEKER_FORGOT_PASSWORD: Endpoint =
    post_form("/jobseeker/forgot_password.php", &[EMAIL]);
pub const SEEKER_RESET_PASSWORD: Endpoint = post_form(
    "/jobseeker/reset_password.php",
    &[TOKEN, PASSWORD],
);
pub const SEEKER_SAVED_JOBS: Endpoint = get("/jobseeker/get_saved_jobs.php", &[JOBSEEKER_ID]);
pub const SEEKER_SAVE_JOB: Endpoint = post_form("/jobseeker/save_job.php", &[JOBSEEKER_ID, JOB_ID]);
pub const SEEKER_UNSAVE_JOB: Endpoint =
    post_form("/jobseeker/unsave_job.php", &[JOBSEEKER_ID, JOB_ID]);
pub const SEEKER_APPLIED_JOBS: Endpoint = get("/jobseeker/get_applied_jobs.php", &[JOBSEEKER_ID]);
pub const SEEKER_APPLY_JOB: Endpoint = post_form("/jobseeker/apply_job.php", &[JOBSEEKER_ID, JOB_ID]);
pub const SEEKER_PROFILE: Endpoint = get("/jobseeker/get_profile.php", &[JOBSEEKER_ID]);
pub const SEEKER_UPDATE_PROFILE: Endpoint =
    post_form("/jobseeker/update_profile.php", &[JOBSEEKER_ID]);
pub const SEEKER_UPLOAD_RESUME: Endpoint =
    post_form("/jobseeker/upload_resume.php", &[JOBSEEKER_ID]);
pub const SEEKER_PARSE_RESUME: Endpoint = post_form("/jobseeker/parse_resume.php", &[]);

// Employers
pub const EMPLOYER_LOGIN: Endpoint = post_form("/employer/login.php", &[EMAIL, PASSWORD]);
pub const EMPLOYER_REGISTER: Endpoint = post_form(
    "/employer/register.php",
    &[COMPANY_NAME, EMAIL, PASSWORD],
);
pub const EMPLOYER_LOGOUT: Endpoint = post_form("/employer/logout.php", &[]);
pub const EMPLOYER_PROFILE: Endpoint = get("/employer/get_profile.php", &[EMPLOYER_ID]);
pub const EMPLOYER_JOBS: Endpoint = get("/employer/get_jobs.php", &[EMPLOYER_ID]);
pub const EMPLOYER_POST_JOB: Endpoint = post_form("/employer/post_job.php", &[EMPLOYER_ID, TITLE]);
pub const EMPLOYER_UPDATE_JOB: Endpoint = post_form("/employer/update_job.php", &[JOB_ID]);
pub const EMPLOYER_DELETE_JOB: Endpoint = post_form("/employer/delete_job.php", &[JOB_ID]);
pub const EMPLOYER_APPLICATIONS: Endpoint = get("/employer/get_applications.php", &[JOB_ID]);
pub const EMPLOYER_UPDATE_APPLICATION: Endpoint = post_form(
    "/employer/update_application_status.php",
    &[APPLICATION_ID, STATUS],
);

// Admins
pub const ADMIN_LOGIN: Endpoint = post_json("/admin/login.php", &[EMAIL, PASSWORD]);
pub const ADMIN_VERIFY_OTP: Endpoint = post_json("/admin/verify_otp.php", &[ADMIN_ID, OTP]);
pub const ADMIN_REGISTER: Endpoint = post_json("/admin/register.php", &[NAME, EMAIL, PASSWORD]);
pub const ADMIN_FORGOT_PASSWORD: Endpoint = post_json("/admin/forgot_password.php", &[EMAIL]);
pub const ADMIN_DASHBOARD_STATS: Endpoint = get("/admin/dashboard_stats.php", &[]);
pub const ADMIN_EMPLOYERS: Endpoint = get("/admin/get_employers.php", &[]);
pub const ADMIN_JOBSEEKERS: Endpoint = get("/admin/get_jobseekers.php", &[]);
pub const ADMIN_SUSPEND_USER: Endpoint = post_json(
    "/admin/suspend_user.php",
    &[USER_ID, USER_TYPE],
);
pub const ADMIN_JOBS: Endpoint = get("/admin/get_jobs.php", &[]);
pub const ADMIN_PAYROLL: Endpoint = get("/admin/payroll/get_payroll.php", &[]);
pub const ADMIN_CALCULATE_PAYROLL: Endpoint = post_json(
    "/admin/payroll/calculate.php",
    &[PERIOD_START, PERIOD_END],
);

// Public job board
pub const JOBS_LIST: Endpoint = get("/jobs/get_jobs.php", &[]);
pub const JOB_DETAILS: Endpoint = get("/jobs/get_job.php", &[]);

// Drivers, teachers, students
const DRIVER_ID: Required = required("driver_id", "Driver ID is required");

pub const DRIVER_CLOCK_IN: Endpoint = post_form("/driver/clock_in.php", &[DRIVER_ID]);
pub const DRIVER_CLOCK_OUT: Endpoint = post_form("/driver/clock_out.php", &[DRIVER_ID]);
pub const DRIVER_TIME_ENTRIES: Endpoint = get("/driver/get_time_entries.php", &[DRIVER_ID]);
pub const TEACHER_COURSES: Endpoint = get("/teacher/get_courses.php", &[TEACHER_ID]);
pub const STUDENT_ENROLLMENTS: Endpoint = get("/student/get_enrollments.php", &[STUDENT_ID]);
