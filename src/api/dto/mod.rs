/*
 * Responsibility
 * - endpoint ごとの request/response DTO (re-export)
 */
pub mod blogs;
pub mod login;
pub mod users;
