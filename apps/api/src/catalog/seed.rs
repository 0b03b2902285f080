//! Sample catalog inserted on first start when `SEED_CATALOG=true`.

use sqlx::PgPool;
use tracing::info;

use crate::catalog::store::{count_projects, insert_project};
use crate::catalog::validation::{validate_new_project, NewProject};
use crate::errors::AppError;
use crate::recommendation::strategy::Difficulty;

struct SampleProject {
    name: &'static str,
    description: &'static str,
    difficulty: Difficulty,
    skills: &'static [&'static str],
    estimated_hours: i32,
    repo_url: &'static str,
}

const SAMPLE_PROJECTS: &[SampleProject] = &[
    SampleProject {
        name: "Task Management Web App",
        description: "Build a full-stack task management application with user authentication, CRUD operations, and real-time updates",
        difficulty: Difficulty::Intermediate,
        skills: &["React", "Node.js", "Express", "MongoDB", "JWT"],
        estimated_hours: 40,
        repo_url: "https://github.com/example/task-manager",
    },
    SampleProject {
        name: "Machine Learning Image Classifier",
        description: "Create an image classification model using CNN to categorize images into different classes",
        difficulty: Difficulty::Advanced,
        skills: &["Python", "TensorFlow", "Keras", "NumPy", "Machine Learning"],
        estimated_hours: 60,
        repo_url: "https://github.com/example/ml-classifier",
    },
    SampleProject {
        name: "E-commerce Product Page",
        description: "Design and develop a responsive e-commerce product listing page with cart functionality",
        difficulty: Difficulty::Beginner,
        skills: &["HTML", "CSS", "JavaScript", "React"],
        estimated_hours: 20,
        repo_url: "https://github.com/example/ecommerce-page",
    },
    SampleProject {
        name: "RESTful API with Authentication",
        description: "Build a secure RESTful API with user authentication, authorization, and CRUD operations",
        difficulty: Difficulty::Intermediate,
        skills: &["Node.js", "Express", "MongoDB", "JWT", "REST API"],
        estimated_hours: 35,
        repo_url: "https://github.com/example/rest-api",
    },
    SampleProject {
        name: "Data Visualization Dashboard",
        description: "Create an interactive dashboard to visualize datasets using charts and graphs",
        difficulty: Difficulty::Intermediate,
        skills: &["React", "D3.js", "Python", "Pandas", "Data Analysis"],
        estimated_hours: 45,
        repo_url: "https://github.com/example/data-viz",
    },
    SampleProject {
        name: "Mobile-First Landing Page",
        description: "Design a modern, mobile-first landing page with animations and responsive design",
        difficulty: Difficulty::Beginner,
        skills: &["HTML", "CSS", "JavaScript", "Responsive Design"],
        estimated_hours: 15,
        repo_url: "https://github.com/example/landing-page",
    },
    SampleProject {
        name: "Real-time Chat Application",
        description: "Build a real-time chat app with WebSocket support, message history, and user presence",
        difficulty: Difficulty::Advanced,
        skills: &["React", "Node.js", "Socket.io", "MongoDB", "WebSockets"],
        estimated_hours: 50,
        repo_url: "https://github.com/example/chat-app",
    },
    SampleProject {
        name: "Portfolio Website",
        description: "Create a professional portfolio website to showcase your projects and skills",
        difficulty: Difficulty::Beginner,
        skills: &["HTML", "CSS", "JavaScript", "React"],
        estimated_hours: 25,
        repo_url: "https://github.com/example/portfolio",
    },
    SampleProject {
        name: "Weather Forecast App",
        description: "Develop a weather app that fetches data from external APIs and displays forecasts",
        difficulty: Difficulty::Beginner,
        skills: &["JavaScript", "React", "API Integration", "CSS"],
        estimated_hours: 20,
        repo_url: "https://github.com/example/weather-app",
    },
    SampleProject {
        name: "Blockchain Voting System",
        description: "Implement a decentralized voting system using blockchain technology",
        difficulty: Difficulty::Advanced,
        skills: &["Solidity", "Ethereum", "Web3.js", "React", "Blockchain"],
        estimated_hours: 70,
        repo_url: "https://github.com/example/blockchain-voting",
    },
    SampleProject {
        name: "URL Shortener Service",
        description: "Build a URL shortening service with analytics and custom short URLs",
        difficulty: Difficulty::Intermediate,
        skills: &["Node.js", "Express", "MongoDB", "React"],
        estimated_hours: 30,
        repo_url: "https://github.com/example/url-shortener",
    },
    SampleProject {
        name: "Sentiment Analysis Tool",
        description: "Create a tool that analyzes sentiment in text using NLP techniques",
        difficulty: Difficulty::Advanced,
        skills: &["Python", "NLTK", "Machine Learning", "Flask", "NLP"],
        estimated_hours: 55,
        repo_url: "https://github.com/example/sentiment-analysis",
    },
];

fn sample_catalog() -> Vec<NewProject> {
    SAMPLE_PROJECTS
        .iter()
        .map(|p| NewProject {
            name: p.name.to_string(),
            description: p.description.to_string(),
            skills: p.skills.iter().map(|s| s.to_string()).collect(),
            difficulty: p.difficulty,
            estimated_hours: Some(p.estimated_hours),
            repo_url: Some(p.repo_url.to_string()),
        })
        .collect()
}

/// Inserts the sample catalog if the projects table is empty. Returns how many were inserted.
pub async fn seed_catalog(pool: &PgPool) -> Result<usize, AppError> {
    if count_projects(pool).await? > 0 {
        info!("Project catalog already populated, skipping seed");
        return Ok(0);
    }

    let catalog = sample_catalog();
    for project in &catalog {
        insert_project(pool, project).await?;
    }

    info!("Seeded {} sample projects", catalog.len());
    Ok(catalog.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_catalog_passes_validation() {
        for project in sample_catalog() {
            let name = project.name.clone();
            assert!(validate_new_project(project).is_ok(), "{name} failed validation");
        }
    }

    #[test]
    fn test_sample_catalog_names_are_unique() {
        let names: HashSet<&str> = SAMPLE_PROJECTS.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), SAMPLE_PROJECTS.len());
        assert_eq!(SAMPLE_PROJECTS.len(), 12);
    }
}
