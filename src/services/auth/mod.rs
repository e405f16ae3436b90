/*
 * Responsibility
 * - 認証まわりの service (password digest / token 発行・検証)
 */
pub mod password;
pub mod token_service;
