/*
 * Responsibility
 * - ドメイン横断の service 層 (re-export)
 */
pub mod auth;
pub mod blog_stats;
pub mod id_codec;
