use crate::domain::{models::Problem, CatalogError};

/// Convert a LeetCode Problem to a domain Problem.
pub fn to_domain_problem(problem: leetcode::Problem) -> Problem {
    Problem {
        title: problem.title,
        title_slug: problem.title_slug,
        difficulty: problem.difficulty,
        content: problem.content,
        tags: problem.tags,
    }
}

pub fn to_catalog_error(err: leetcode::LeetCodeFetchError) -> CatalogError {
    CatalogError::Transport(err.to_string())
}
