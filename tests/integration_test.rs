use question_extractor::config::Config;
use question_extractor::{
    parse_documents, Answer, App, ChoiceOption, IdSequence, QuestionRecord, RawDocument,
    RunSummary,
};
use std::path::Path;

const TURKISH: &str = "\
Sınav Notları

1) Türkiye'nin başkenti neresidir?
A) İstanbul
B) Ankara
C) İzmir
Doğru Cevap: B
Açıklama: Ankara 1923'ten beri başkenttir.

2. Hangisi bir memelidir?
A) Balina* B) Köpekbalığı C) Ahtapot

Soru 3: Cevabı olmayan soru
A) x
B) y
";

const ENGLISH: &str = "\
**Soru 1:** What color is the sky?\r
A) Red\r
B) Blue\r
C) Green\r
Answer: B\r
🟦 Toplu açıklamalar\r
1 - B\r
";

fn write_inputs(dir: &Path) {
    std::fs::write(dir.join("1.txt"), TURKISH).unwrap();
    std::fs::write(dir.join("3.txt"), ENGLISH).unwrap();
}

fn config_for(dir: &Path, output: &str) -> Config {
    Config {
        workspace: dir.to_path_buf(),
        input_files: vec!["1.txt".into(), "2.txt".into(), "3.txt".into()],
        output_file: dir.join(output),
        ..Config::default()
    }
}

fn read_records(path: &Path) -> Vec<QuestionRecord> {
    let json = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&json).unwrap()
}

#[tokio::test]
async fn test_end_to_end_run_skips_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    let config = config_for(dir.path(), "data/questions.json");

    let summary = App::initialize(config).run().await.unwrap();

    assert_eq!(
        summary,
        RunSummary {
            documents: 2,
            blocks: 4,
            emitted: 3,
            dropped: 1,
        }
    );

    let records = read_records(&dir.path().join("data/questions.json"));
    assert_eq!(records.len(), 3);

    let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let capital = &records[0];
    assert_eq!(capital.source, "1.txt");
    assert_eq!(capital.number, 1);
    assert_eq!(capital.question, "Türkiye'nin başkenti neresidir?");
    assert_eq!(capital.options.len(), 3);
    assert_eq!(capital.answer, Answer::labeled('B', "Ankara"));
    assert_eq!(capital.explanation, "Ankara 1923'ten beri başkenttir.");

    let mammal = &records[1];
    assert_eq!(mammal.number, 2);
    assert_eq!(mammal.question, "Hangisi bir memelidir?");
    assert_eq!(
        mammal.options,
        vec![
            ChoiceOption::new('A', "Balina"),
            ChoiceOption::new('B', "Köpekbalığı"),
            ChoiceOption::new('C', "Ahtapot"),
        ]
    );
    assert_eq!(mammal.answer, Answer::labeled('A', "Balina"));

    let sky = &records[2];
    assert_eq!(sky.source, "3.txt");
    assert_eq!(sky.question, "What color is the sky?");
    assert_eq!(sky.answer, Answer::labeled('B', "Blue"));
    assert_eq!(sky.explanation, "");
}

#[tokio::test]
async fn test_rerun_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());

    App::initialize(config_for(dir.path(), "a.json"))
        .run()
        .await
        .unwrap();
    App::initialize(config_for(dir.path(), "b.json"))
        .run()
        .await
        .unwrap();

    let first = std::fs::read(dir.path().join("a.json")).unwrap();
    let second = std::fs::read(dir.path().join("b.json")).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_scan_mode_orders_by_file_name() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("b.txt"), "1) İkinci dosya?\nCevap: Evet").unwrap();
    std::fs::write(dir.path().join("a.txt"), "1) Birinci dosya?\nCevap: Hayır").unwrap();

    let config = Config {
        workspace: dir.path().to_path_buf(),
        input_files: Vec::new(),
        output_file: dir.path().join("out.json"),
        pretty_output: false,
        ..Config::default()
    };

    App::initialize(config).run().await.unwrap();

    let records = read_records(&dir.path().join("out.json"));
    let sources: Vec<&str> = records.iter().map(|r| r.source.as_str()).collect();
    assert_eq!(sources, vec!["a.txt", "b.txt"]);
    assert_eq!(records[0].answer, Answer::free_text("Hayır"));
}

#[test]
fn test_dot_numbering_without_space() {
    let docs = vec![RawDocument::from_text(
        "1.txt",
        "1.Başkent neresidir?\nCevap: Ankara\n2.Hangisi?\nCevap: Evet",
    )];

    let (records, _) = parse_documents(&docs, IdSequence::default());

    let summary: Vec<(u32, &str, &str)> = records
        .iter()
        .map(|r| (r.number, r.question.as_str(), r.answer.text.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![(1, "Başkent neresidir?", "Ankara"), (2, "Hangisi?", "Evet")]
    );
}

#[test]
fn test_unlabelled_answer_serializes_empty_label() {
    let docs = vec![RawDocument::from_text(
        "1.txt",
        "• Türkiye'nin başkenti neresidir?\nCevap: Ankara",
    )];

    let (records, ids) = parse_documents(&docs, IdSequence::default());
    assert_eq!(ids.peek(), 2);

    let json = serde_json::to_value(&records).unwrap();
    assert_eq!(json[0]["answer"]["label"], "");
    assert_eq!(json[0]["answer"]["text"], "Ankara");
    assert_eq!(json[0]["number"], 1);
}

#[test]
fn test_blocking_run_with_compact_output() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    let config = Config {
        pretty_output: false,
        ..config_for(dir.path(), "compact.json")
    };

    let summary = tokio_test::block_on(App::initialize(config).run()).unwrap();
    assert_eq!(summary.emitted, 3);

    let json = std::fs::read_to_string(dir.path().join("compact.json")).unwrap();
    assert!(json.starts_with("[{\"id\":1,"));
    assert!(!json.contains('\n'));
}
