//! Scoring and ranking — combines five sub-scores into one weighted match
//! score per posting, derives a display hiring probability, and sorts.
//!
//! Every sub-score and the final score live in [0, 100]; the probability
//! lives in [0, 1]. All formulas are pure functions of the profile and the
//! posting, so two identical requests always rank identically.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::catalog::JobCatalog;
use crate::embedding::cosine_similarity;
use crate::matching::extractor::CandidateProfile;

/// Weights of the five sub-scores. Must sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skill: f32,
    pub experience: f32,
    pub location: f32,
    pub salary: f32,
    pub semantic: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 0.40,
            experience: 0.20,
            location: 0.15,
            salary: 0.15,
            semantic: 0.10,
        }
    }
}

/// The five per-posting sub-scores, each in [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill_score: f32,
    pub experience_score: f32,
    pub location_score: f32,
    pub salary_score: f32,
    pub semantic_score: f32,
}

/// One ranked result row, serialized straight into the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary_lpa: u32,
    pub final_score: f32,
    pub hiring_probability: f32,
    pub breakdown: ScoreBreakdown,
}

/// Fraction of the posting's required skills present in the candidate's
/// skill set, scaled to 100. A posting with no required skills scores a
/// neutral 50 rather than dividing by zero.
pub fn skill_score(candidate_skills: &[String], required_skills: &[String]) -> f32 {
    if required_skills.is_empty() {
        return 50.0;
    }
    let matched = required_skills
        .iter()
        .filter(|req| {
            let req_lower = req.to_lowercase();
            candidate_skills.iter().any(|c| *c == req_lower)
        })
        .count();
    round1((matched as f32 / required_skills.len() as f32) * 100.0)
}

/// Meeting the requirement earns 70 plus a bonus of 5 per surplus year,
/// capped at 100. Falling short costs 20 per missing year, floored at 10.
/// A posting with no experience requirement is always fully satisfied.
pub fn experience_score(candidate_years: u32, required_years: u32) -> f32 {
    if required_years == 0 {
        return 100.0;
    }
    if candidate_years >= required_years {
        let surplus = candidate_years - required_years;
        (70.0 + surplus as f32 * 5.0).min(100.0)
    } else {
        let gap = required_years - candidate_years;
        (70.0 - gap as f32 * 20.0).max(10.0)
    }
}

/// Remote postings and exact city matches score 100; everything else gets
/// the willing-to-relocate floor.
pub fn location_score(candidate_location: Option<&str>, job_location: &str) -> f32 {
    let job_lower = job_location.to_lowercase();
    if job_lower == "remote" {
        return 100.0;
    }
    match candidate_location {
        Some(loc) if loc.to_lowercase() == job_lower => 100.0,
        _ => 75.0,
    }
}

/// Compares the posting's single salary figure against the candidate's
/// expectation: at or above earns a bounded bonus, below a floored penalty.
pub fn salary_score(salary_lpa: u32, expected_salary_lpa: u32) -> f32 {
    if salary_lpa >= expected_salary_lpa {
        let above = (salary_lpa - expected_salary_lpa) as f32;
        (60.0 + above * 2.0).min(100.0)
    } else {
        let below = (expected_salary_lpa - salary_lpa) as f32;
        (60.0 - below * 3.0).max(20.0)
    }
}

/// Piecewise-linear mapping from final score to a display probability.
/// Higher bands climb faster; the map is monotonic non-decreasing and
/// lands exactly on 1.0 at a score of 100.
pub fn hiring_probability(final_score: f32) -> f32 {
    let p = if final_score >= 85.0 {
        0.85 + (final_score - 85.0) * 0.01
    } else if final_score >= 70.0 {
        0.60 + (final_score - 70.0) * 0.016
    } else if final_score >= 50.0 {
        0.30 + (final_score - 50.0) * 0.015
    } else {
        final_score * 0.005
    };
    round2(p)
}

/// Weighted combination of the sub-scores, clamped to [0, 100].
pub fn final_score(breakdown: &ScoreBreakdown, weights: &ScoringWeights) -> f32 {
    let combined = breakdown.skill_score * weights.skill
        + breakdown.experience_score * weights.experience
        + breakdown.location_score * weights.location
        + breakdown.salary_score * weights.salary
        + breakdown.semantic_score * weights.semantic;
    round1(combined.clamp(0.0, 100.0))
}

/// Scores every posting in the catalog against the profile and returns the
/// full list sorted by final score descending. The sort is stable, so
/// equal scores keep catalog order.
pub fn rank_jobs(
    profile: &CandidateProfile,
    resume_embedding: &[f32],
    catalog: &JobCatalog,
    weights: &ScoringWeights,
) -> Vec<JobMatch> {
    let mut matches: Vec<JobMatch> = catalog
        .records()
        .iter()
        .map(|record| {
            let posting = &record.posting;
            let semantic =
                (cosine_similarity(resume_embedding, &record.embedding) * 100.0).clamp(0.0, 100.0);
            let breakdown = ScoreBreakdown {
                skill_score: skill_score(&profile.skills, &posting.required_skills),
                experience_score: experience_score(
                    profile.experience_years,
                    posting.min_experience_years,
                ),
                location_score: location_score(profile.location.as_deref(), &posting.location),
                salary_score: salary_score(posting.salary_lpa, profile.expected_salary_lpa),
                semantic_score: round1(semantic),
            };
            let final_score = final_score(&breakdown, weights);
            JobMatch {
                id: posting.id.clone(),
                title: posting.title.clone(),
                company: posting.company.clone(),
                location: posting.location.clone(),
                salary_lpa: posting.salary_lpa,
                final_score,
                hiring_probability: hiring_probability(final_score),
                breakdown,
            }
        })
        .collect();

    // Stable sort: ties keep catalog order. Scores are clamped, never NaN.
    matches.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(Ordering::Equal)
    });

    matches
}

fn round1(x: f32) -> f32 {
    (x * 10.0).round() / 10.0
}

fn round2(x: f32) -> f32 {
    (x * 100.0).round() / 100.0
}
