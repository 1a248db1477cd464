use anyhow::Result;
use clap::Parser;
use std::path::Path;

// Import from lexsift-core
use lexsift_core::{ClassifierConfig, DocumentFormat, DocumentProcessor, DocumentType};

#[derive(Parser)]
#[command(name = "lexsift")]
#[command(about = "Classify legal documents (PDF, Word) into agreement types")]
struct Args {
    /// Path to the document to classify (pdf, doc, or docx)
    #[arg(short, long)]
    input: Option<String>,

    /// Path to extra-rules config file (YAML format)
    #[arg(short, long)]
    config: Option<String>,

    /// Write the full classification report as JSON to this path
    #[arg(short, long)]
    output: Option<String>,

    /// Show the known document types and exit
    #[arg(long)]
    show_types: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("🦀 Lexsift Document Classifier");

    if args.show_types {
        show_types();
        return Ok(());
    }

    let Some(input) = args.input.as_deref() else {
        eprintln!("❌ No input file given. Use --input <path>, or --show-types.");
        std::process::exit(1);
    };

    // Check if input file exists
    if !Path::new(input).exists() {
        println!("⚠️  Input document not found at: {input}");
        println!("   Please check the file path.");
        return Ok(());
    }

    // Reject anything outside the accepted extensions before touching it
    let format = DocumentFormat::from_path(Path::new(input));
    if !format.is_supported() {
        eprintln!("❌ Unsupported file type: {input} (accepted extensions: pdf, doc, docx)");
        std::process::exit(1);
    }

    let config = ClassifierConfig::load_with_fallback(args.config.as_deref());

    if let Some(config_path) = &args.config {
        println!("📋 Loaded rules config from: {config_path}");
    } else {
        println!("📋 Using built-in rules");
    }

    let processor = DocumentProcessor::with_config(&config)?;

    println!("📄 Processing: {input}");

    match processor.process_file(Path::new(input)) {
        Ok(report) => {
            println!("✅ Successfully classified document");
            println!("   - Format: {}", report.format.as_str());
            println!("   - Extracted characters: {}", report.extracted_chars);
            println!("📋 Document type: {}", report.label);

            if let Some(output_path) = &args.output {
                report.save(output_path)?;
                println!("💾 Report saved to: {output_path}");
            }
        }
        Err(e) => {
            eprintln!("❌ Classification failed: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn show_types() {
    println!("\n📋 Known document types:");
    for doc_type in DocumentType::all() {
        println!("  - {}", doc_type.label());
    }

    println!("\n📝 Usage Examples:");
    println!("  lexsift -i agreement.pdf");
    println!("  lexsift -i agreement.docx -o report.json");
    println!("  lexsift -i agreement.pdf -c extra-rules.yaml");
}
