// LLM prompt constants for the recommendation engine.

/// System prompt for project recommendation. `JSON_ONLY_INSTRUCTION` is appended at call time.
pub const RECOMMENDATION_SYSTEM: &str = "You are an expert career advisor for college students. \
    Provide practical, actionable project recommendations.";

/// Recommendation prompt template.
/// Replace: {branch}, {skills}, {projects}
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"You are an AI career advisor for college students. Analyze the student's profile and recommend suitable projects from the list.

Student Profile:
- Branch: {branch}
- Skills: {skills}

Available Projects:
{projects}

For EACH project, provide:
1. Match percentage (0-100) based on skill overlap and difficulty appropriateness
2. 2-3 specific resume bullet points the student can add after completing this project
3. Brief reasoning for why this project matches their profile

Respond with JSON in this exact format:
{
  "recommendations": [
    {
      "projectId": "the exact Project ID from the list above",
      "matchPercentage": 0,
      "resumePoints": ["point 1", "point 2", "point 3"],
      "reasoning": "explanation"
    }
  ]
}

Prioritize projects with higher match percentages. Include at least 3-5 recommendations if available."#;
