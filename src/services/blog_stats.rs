/*
 * Responsibility
 * - blog 一覧に対する集計 helper (pure function)
 * - handler/repo に依存しない (入力は行データのみ)
 */
use crate::repos::blog_repo::BlogRow;

pub fn total_likes(blogs: &[BlogRow]) -> i64 {
    blogs.iter().map(|b| b.likes).sum()
}

/// likes が最大の blog を返す。空なら None。
/// 同数の場合は後の要素が勝つ。
pub fn favorite_blog(blogs: &[BlogRow]) -> Option<&BlogRow> {
    blogs.iter().fold(None, |best, blog| match best {
        Some(prev) if prev.likes > blog.likes => Some(prev),
        _ => Some(blog),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn blog(title: &str, likes: i64) -> BlogRow {
        BlogRow {
            blog_id: likes,
            title: title.to_string(),
            author: Some("v".to_string()),
            url: "http://localhost".to_string(),
            likes,
            user_id: Uuid::nil(),
        }
    }

    #[test]
    fn total_likes_sums_the_list() {
        let blogs = vec![blog("first", 6), blog("second", 9)];
        assert_eq!(total_likes(&blogs), 15);
    }

    #[test]
    fn total_likes_of_empty_list_is_zero() {
        assert_eq!(total_likes(&[]), 0);
    }

    #[test]
    fn favorite_blog_picks_the_most_liked() {
        let blogs = vec![blog("first", 6), blog("best", 9)];
        assert_eq!(favorite_blog(&blogs).unwrap().title, "best");
    }

    #[test]
    fn favorite_blog_of_empty_list_is_none() {
        assert!(favorite_blog(&[]).is_none());
    }

    #[test]
    fn favorite_blog_tie_keeps_the_later_entry() {
        let blogs = vec![blog("first", 9), blog("second", 9)];
        assert_eq!(favorite_blog(&blogs).unwrap().title, "second");
    }
}
