use readiness_core::QuestionBank;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let questions = QuestionBank::load();

    if json {
        println!("{}", serde_json::to_string_pretty(&questions)?);
        return Ok(());
    }

    for (i, question) in questions.iter().enumerate() {
        println!("{}. {}", i + 1, question.prompt);
        let weights = question
            .weights
            .iter()
            .filter(|(_, w)| **w != 0)
            .map(|(c, w)| format!("{c} x{w}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("   weights: {weights}");
    }
    Ok(())
}
