/// System prompt for repository analysis. `JSON_ONLY_INSTRUCTION` is appended at call time.
pub const ANALYSIS_SYSTEM: &str = "You are an expert software engineering mentor who analyzes \
    code repositories to help students learn and grow.";

/// Repository analysis prompt template. Replace `{repo_url}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze this GitHub repository and provide detailed insights: {repo_url}

Since you cannot directly access the repository, provide a realistic analysis based on typical projects of this type. Extract:

1. Technologies/Skills: List programming languages, frameworks, and tools likely used
2. Complexity: Rate as Low, Medium, or High based on typical projects of this nature
3. Code Quality: Assess typical patterns, structure, and best practices
4. Learning Value: Explain what students would learn from this type of project
5. Portfolio Impact: How impressive this project would be for a student portfolio
6. Recommendations: 3-5 actionable suggestions to improve or extend this project

Respond with JSON in this exact format:
{
  "skills": ["skill1", "skill2"],
  "complexity": "Low" | "Medium" | "High",
  "recommendations": ["rec1", "rec2"],
  "insights": {
    "codeQuality": "detailed assessment",
    "learningValue": "what students learn",
    "portfolioImpact": "value for portfolio"
  }
}"#;
