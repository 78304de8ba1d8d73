//! Editorial previous/next link graph.
//!
//! Links are plain id references, so nothing at the storage level stops an
//! operator from chaining posts into a loop. These helpers detect that.

use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::Post;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkDirection {
    Previous,
    Next,
}

impl LinkDirection {
    pub fn target(self, post: &Post) -> Option<Uuid> {
        match self {
            LinkDirection::Previous => post.previous_post_id,
            LinkDirection::Next => post.next_post_id,
        }
    }
}

/// Map of post id to the post it links to in `direction`.
pub fn link_map<'a>(
    posts: impl IntoIterator<Item = &'a Post>,
    direction: LinkDirection,
) -> HashMap<Uuid, Uuid> {
    posts
        .into_iter()
        .filter_map(|post| direction.target(post).map(|target| (post.id, target)))
        .collect()
}

/// Follow `links` from `start`. Returns the posts forming a loop, in walk
/// order, if the walk ever revisits a post.
pub fn find_cycle(links: &HashMap<Uuid, Uuid>, start: Uuid) -> Option<Vec<Uuid>> {
    let mut path = vec![start];
    let mut current = start;

    while let Some(&next) = links.get(&current) {
        if let Some(pos) = path.iter().position(|id| *id == next) {
            return Some(path[pos..].to_vec());
        }
        path.push(next);
        current = next;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<Uuid> {
        (0..n).map(|_| Uuid::new_v4()).collect()
    }

    #[test]
    fn test_open_chain_has_no_cycle() {
        let p = ids(3);
        let links = HashMap::from([(p[0], p[1]), (p[1], p[2])]);
        assert_eq!(find_cycle(&links, p[0]), None);
    }

    #[test]
    fn test_self_link_is_a_cycle() {
        let p = ids(1);
        let links = HashMap::from([(p[0], p[0])]);
        assert_eq!(find_cycle(&links, p[0]), Some(vec![p[0]]));
    }

    #[test]
    fn test_loop_reached_from_tail() {
        let p = ids(4);
        // p0 -> p1 -> p2 -> p3 -> p1
        let links = HashMap::from([(p[0], p[1]), (p[1], p[2]), (p[2], p[3]), (p[3], p[1])]);
        assert_eq!(find_cycle(&links, p[0]), Some(vec![p[1], p[2], p[3]]));
    }

    #[test]
    fn test_doubly_linked_chain_is_acyclic_per_direction() {
        let p = ids(2);
        let mut a = Post {
            id: p[0],
            author_id: Uuid::new_v4(),
            title: "A".into(),
            overview: String::new(),
            content: String::new(),
            thumbnail: None,
            featured: false,
            previous_post_id: None,
            next_post_id: Some(p[1]),
            created_at: chrono::Utc::now(),
        };
        let mut b = a.clone();
        b.id = p[1];
        b.next_post_id = None;
        b.previous_post_id = Some(p[0]);
        a.featured = true;

        let posts = [a, b];
        for direction in [LinkDirection::Previous, LinkDirection::Next] {
            let links = link_map(&posts, direction);
            assert_eq!(links.len(), 1);
            assert!(posts.iter().all(|post| find_cycle(&links, post.id).is_none()));
        }
    }
}
