//! Job catalog — the fixed set of open postings the service matches against.
//!
//! Postings are in-memory configuration data, loaded once at startup.
//! `JobCatalog::build` embeds every posting exactly once; the catalog is
//! then shared read-only (`Arc`) for the lifetime of the process.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::embedding::{EmbedError, Embedder};

/// A single open role. Read-only during scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary_lpa: u32,
    pub required_skills: Vec<String>,
    pub min_experience_years: u32,
    pub description: String,
}

impl JobPosting {
    /// The text a posting is embedded from: title, description, and the
    /// required skills joined with spaces.
    pub fn embedding_input(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.description,
            self.required_skills.join(" ")
        )
    }
}

/// A posting plus its precomputed embedding. The vector is computed once
/// in `JobCatalog::build` and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct JobRecord {
    pub posting: JobPosting,
    pub embedding: Vec<f32>,
}

/// The immutable catalog shared across requests.
pub struct JobCatalog {
    records: Vec<JobRecord>,
}

impl JobCatalog {
    /// Embeds every posting with the given backend. Called once at startup;
    /// a failure here is fatal since scoring cannot run without job vectors.
    pub async fn build(
        embedder: &dyn Embedder,
        postings: Vec<JobPosting>,
    ) -> Result<Self, EmbedError> {
        let mut records = Vec::with_capacity(postings.len());
        for posting in postings {
            let embedding = embedder.embed(&posting.embedding_input()).await?;
            records.push(JobRecord { posting, embedding });
        }
        info!("Precomputed embeddings for {} jobs", records.len());
        Ok(Self { records })
    }

    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    pub fn postings(&self) -> impl Iterator<Item = &JobPosting> {
        self.records.iter().map(|r| &r.posting)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn job(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    salary_lpa: u32,
    required_skills: &[&str],
    min_experience_years: u32,
    description: &str,
) -> JobPosting {
    JobPosting {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        salary_lpa,
        required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
        min_experience_years,
        description: description.to_string(),
    }
}

/// The built-in catalog: 20 curated tech postings.
pub fn builtin_jobs() -> Vec<JobPosting> {
    vec![
        job(
            "j001",
            "Frontend Developer",
            "TechCorp India",
            "Bangalore",
            12,
            &["react", "javascript", "css", "html", "typescript"],
            2,
            "Build modern React web applications with TypeScript and REST APIs",
        ),
        job(
            "j002",
            "Full Stack Engineer",
            "Startup Labs",
            "Hyderabad",
            18,
            &["node.js", "react", "mongodb", "express", "javascript"],
            3,
            "Design and build full-stack applications using MERN stack",
        ),
        job(
            "j003",
            "Backend Developer",
            "Enterprise Solutions",
            "Pune",
            15,
            &["python", "django", "postgresql", "rest api", "docker"],
            3,
            "Develop scalable backend services using Python and Django",
        ),
        job(
            "j004",
            "Data Scientist",
            "Analytics House",
            "Mumbai",
            22,
            &["python", "pandas", "machine learning", "scikit-learn", "sql"],
            2,
            "Build ML models and data pipelines for business intelligence",
        ),
        job(
            "j005",
            "DevOps Engineer",
            "CloudFirst",
            "Remote",
            20,
            &["docker", "kubernetes", "aws", "ci/cd", "linux"],
            3,
            "Manage cloud infrastructure and automate deployment pipelines",
        ),
        job(
            "j006",
            "React Native Developer",
            "MobileFirst",
            "Chennai",
            14,
            &["react native", "javascript", "mobile", "ios", "android"],
            2,
            "Build cross-platform mobile apps using React Native",
        ),
        job(
            "j007",
            "Machine Learning Engineer",
            "AI Ventures",
            "Bangalore",
            28,
            &["python", "tensorflow", "pytorch", "deep learning", "nlp"],
            3,
            "Research and implement deep learning models for production AI systems",
        ),
        job(
            "j008",
            "Java Backend Developer",
            "Banking Systems Ltd",
            "Mumbai",
            16,
            &["java", "spring boot", "microservices", "sql", "rest api"],
            2,
            "Build robust Java microservices for banking and fintech applications",
        ),
        job(
            "j009",
            "Cloud Architect",
            "AWS Solutions Partner",
            "Remote",
            35,
            &["aws", "azure", "terraform", "cloud", "architecture"],
            5,
            "Design and implement enterprise-scale cloud architectures",
        ),
        job(
            "j010",
            "UI/UX Engineer",
            "Design Studio",
            "Delhi",
            13,
            &["figma", "css", "react", "design systems", "javascript"],
            2,
            "Create pixel-perfect UI implementations from Figma designs",
        ),
        job(
            "j011",
            "Python Developer",
            "DataSystems Inc",
            "Hyderabad",
            14,
            &["python", "fastapi", "postgresql", "redis", "docker"],
            2,
            "Build APIs and data processing systems using Python and FastAPI",
        ),
        job(
            "j012",
            "Security Engineer",
            "CyberShield",
            "Bangalore",
            24,
            &["cybersecurity", "penetration testing", "python", "linux", "encryption"],
            3,
            "Perform security audits and build defensive systems",
        ),
        job(
            "j013",
            "Site Reliability Engineer",
            "Reliability Corp",
            "Remote",
            26,
            &["sre", "kubernetes", "prometheus", "golang", "linux"],
            4,
            "Maintain reliability and performance of large-scale distributed systems",
        ),
        job(
            "j014",
            "Angular Developer",
            "Enterprise Web",
            "Pune",
            12,
            &["angular", "typescript", "rxjs", "html", "css"],
            2,
            "Build enterprise Angular applications with TypeScript",
        ),
        job(
            "j015",
            "Database Administrator",
            "DataSolutions",
            "Chennai",
            15,
            &["postgresql", "mysql", "mongodb", "sql", "redis"],
            3,
            "Manage and optimize high-performance databases at scale",
        ),
        job(
            "j016",
            "Blockchain Developer",
            "Web3 Labs",
            "Remote",
            30,
            &["solidity", "web3", "ethereum", "javascript", "smart contracts"],
            2,
            "Build decentralized applications and smart contracts",
        ),
        job(
            "j017",
            "Go Developer",
            "HighPerf Systems",
            "Bangalore",
            22,
            &["golang", "microservices", "docker", "grpc", "linux"],
            3,
            "Build high-performance microservices in Go",
        ),
        job(
            "j018",
            "QA Automation Engineer",
            "QualityFirst",
            "Hyderabad",
            11,
            &["selenium", "pytest", "cypress", "javascript", "testing"],
            2,
            "Build automated test suites using Selenium and Cypress",
        ),
        job(
            "j019",
            "Data Engineer",
            "BigData Co",
            "Mumbai",
            20,
            &["spark", "hadoop", "python", "sql", "aws"],
            3,
            "Design and build data pipelines using Spark and cloud platforms",
        ),
        job(
            "j020",
            "Product Engineer",
            "SaaS Platform",
            "Bangalore",
            18,
            &["react", "node.js", "python", "postgresql", "aws"],
            3,
            "Full ownership engineering for B2B SaaS product features",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::HashEmbedder;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_catalog_has_twenty_jobs() {
        assert_eq!(builtin_jobs().len(), 20);
    }

    #[test]
    fn test_builtin_job_ids_are_unique() {
        let jobs = builtin_jobs();
        let ids: HashSet<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids.len(), jobs.len());
    }

    #[test]
    fn test_every_builtin_job_declares_skills_and_salary() {
        for job in builtin_jobs() {
            assert!(!job.required_skills.is_empty(), "{} has no skills", job.id);
            assert!(job.salary_lpa > 0, "{} has no salary", job.id);
        }
    }

    #[test]
    fn test_embedding_input_joins_title_description_skills() {
        let posting = job(
            "j999",
            "Rust Engineer",
            "Acme",
            "Remote",
            30,
            &["rust", "tokio"],
            3,
            "Build async services",
        );
        assert_eq!(
            posting.embedding_input(),
            "Rust Engineer Build async services rust tokio"
        );
    }

    #[tokio::test]
    async fn test_catalog_build_embeds_every_posting() {
        let embedder = HashEmbedder::default();
        let catalog = JobCatalog::build(&embedder, builtin_jobs()).await.unwrap();
        assert_eq!(catalog.len(), 20);
        assert!(!catalog.is_empty());
        for record in catalog.records() {
            assert!(
                record.embedding.iter().any(|x| *x != 0.0),
                "{} embedded to a zero vector",
                record.posting.id
            );
        }
    }
}
