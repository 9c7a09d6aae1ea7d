#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use poem_indexer::bulk::{BulkConfig, IdStrategy, MemoryTransport};
    use poem_indexer::document::{DocumentLoader, JsonPoemLoader, Poem};
    use poem_indexer::error::IngestError;
    use poem_indexer::pipeline::{CancellationToken, IngestPipeline, PipelineConfig};
    use poem_indexer::walker::WalkConfig;
    use tempfile::TempDir;

    const JING_YE_SI: &str =
        r#"[{"title":"靜夜思","author":"李白","paragraphs":["床前明月光"],"notes":[]}]"#;

    fn write_file(dir: &Path, relative: &str, contents: &str) {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    /// Loads normally and requests cancellation while reading the second file.
    struct InterruptingLoader {
        inner: JsonPoemLoader,
        token: CancellationToken,
        calls: AtomicUsize,
    }

    impl DocumentLoader for InterruptingLoader {
        fn load(&self, path: &Path) -> poem_indexer::error::Result<Vec<Poem>> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 1 {
                self.token.cancel();
            }
            self.inner.load(path)
        }
    }

    fn quiet_bulk() -> BulkConfig {
        BulkConfig::default().with_flush_interval(Duration::from_secs(3600))
    }

    fn run(
        dir: &Path,
        walk: WalkConfig,
        transport: Arc<MemoryTransport>,
    ) -> poem_indexer::error::Result<poem_indexer::pipeline::RunSummary> {
        let config = PipelineConfig::new(dir)
            .with_walk(walk)
            .with_bulk(quiet_bulk());
        IngestPipeline::new(config, transport).run()
    }

    #[test]
    fn test_single_poem_is_simplified_and_indexed() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "tang/libai.json", JING_YE_SI);

        let transport = Arc::new(MemoryTransport::new());
        let summary = run(dir.path(), WalkConfig::default(), transport.clone()).unwrap();

        let documents = transport.documents();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0]["title"], "静夜思");
        assert_eq!(documents[0]["author"], "李白");
        assert_eq!(documents[0]["paragraphs"][0], "床前明月光");
        assert_eq!(documents[0]["notes"], serde_json::json!([]));

        assert_eq!(summary.documents_indexed, 1);
        assert_eq!(summary.documents_failed, 0);
        assert_eq!(summary.files_scanned, 1);
        assert!(summary.success);
        assert!(!summary.cancelled);
    }

    #[test]
    fn test_excluded_file_is_not_indexed() {
        let dir = TempDir::new().unwrap();
        write_file(
            dir.path(),
            "authors.tang.json",
            r#"[{"title":"不應出現","author":"無名"}]"#,
        );
        write_file(dir.path(), "poet.tang.0.json", JING_YE_SI);

        let transport = Arc::new(MemoryTransport::new());
        let walk = WalkConfig::default().with_excluded_file("authors.tang.json");
        let summary = run(dir.path(), walk, transport.clone()).unwrap();

        let documents = transport.documents();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0]["title"], "静夜思");
        assert_eq!(summary.files_scanned, 1);
    }

    #[test]
    fn test_error_directory_is_skipped() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "good.json", JING_YE_SI);
        write_file(dir.path(), "error/bad.json", r#"[{"title":"錯誤"}]"#);
        write_file(dir.path(), "error/nested/bad.json", r#"[{"title":"錯誤"}]"#);

        let transport = Arc::new(MemoryTransport::new());
        let summary = run(dir.path(), WalkConfig::default(), transport.clone()).unwrap();

        assert_eq!(transport.documents().len(), 1);
        assert_eq!(summary.files_scanned, 1);
    }

    #[test]
    fn test_bad_file_does_not_stop_the_run() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "a.json", JING_YE_SI);
        write_file(dir.path(), "b.json", "{ this is not json");
        write_file(dir.path(), "c.json", r#"{"title":"not an array"}"#);
        write_file(
            dir.path(),
            "d.json",
            r#"[{"title":"登鸛雀樓","author":"王之渙","paragraphs":["白日依山盡","黃河入海流"]}]"#,
        );

        let transport = Arc::new(MemoryTransport::new());
        let summary = run(dir.path(), WalkConfig::default(), transport.clone()).unwrap();

        assert_eq!(summary.files_scanned, 4);
        assert_eq!(summary.files_skipped, 2);
        assert_eq!(summary.documents_indexed, 2);
        assert!(summary.success);

        let titles: Vec<String> = transport
            .documents()
            .iter()
            .map(|d| d["title"].as_str().unwrap().to_string())
            .collect();
        assert!(titles.contains(&"静夜思".to_string()));
        assert!(titles.contains(&"登鹳雀楼".to_string()));
    }

    #[test]
    fn test_paragraph_order_is_kept() {
        let dir = TempDir::new().unwrap();
        write_file(
            dir.path(),
            "poem.json",
            r#"[{"title":"春曉","author":"孟浩然",
                "paragraphs":["春眠不覺曉","處處聞啼鳥","夜來風雨聲","花落知多少"],
                "notes":["第一注","第二注"]}]"#,
        );

        let transport = Arc::new(MemoryTransport::new());
        run(dir.path(), WalkConfig::default(), transport.clone()).unwrap();

        let document = &transport.documents()[0];
        assert_eq!(
            document["paragraphs"],
            serde_json::json!(["春眠不觉晓", "处处闻啼鸟", "夜来风雨声", "花落知多少"])
        );
        assert_eq!(document["notes"], serde_json::json!(["第一注", "第二注"]));
    }

    #[test]
    fn test_rejected_documents_fail_the_run() {
        let dir = TempDir::new().unwrap();
        write_file(
            dir.path(),
            "poems.json",
            r#"[
                {"title":"靜夜思","author":"李白","paragraphs":["床前明月光"]},
                {"title":"","author":"無名","paragraphs":[]}
            ]"#,
        );

        let transport = Arc::new(
            MemoryTransport::new()
                .with_rejection(|doc| (doc["title"] == "").then(|| "empty title".to_string())),
        );
        let summary = run(dir.path(), WalkConfig::default(), transport).unwrap();

        assert_eq!(summary.documents_indexed, 1);
        assert_eq!(summary.documents_failed, 1);
        assert!(!summary.success);
    }

    #[test]
    fn test_unreachable_service_aborts_before_work() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "poems.json", JING_YE_SI);

        let transport = Arc::new(MemoryTransport::unreachable("connection refused"));
        let err = run(dir.path(), WalkConfig::default(), transport.clone()).unwrap_err();

        assert!(matches!(err, IngestError::Connectivity(_)));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_missing_root_is_walk_error() {
        let dir = TempDir::new().unwrap();
        let transport = Arc::new(MemoryTransport::new());
        let err = run(
            &dir.path().join("does-not-exist"),
            WalkConfig::default(),
            transport,
        )
        .unwrap_err();

        assert!(matches!(err, IngestError::Walk(_)));
    }

    #[test]
    fn test_rerun_overwrites_with_content_ids() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "poems.json", JING_YE_SI);

        let transport = Arc::new(MemoryTransport::new());
        run(dir.path(), WalkConfig::default(), transport.clone()).unwrap();
        run(dir.path(), WalkConfig::default(), transport.clone()).unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(
            requests[0].actions[0]["index"]["_id"],
            requests[1].actions[0]["index"]["_id"]
        );
    }

    #[test]
    fn test_auto_ids_omit_id() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "poems.json", JING_YE_SI);

        let transport = Arc::new(MemoryTransport::new());
        let config = PipelineConfig::new(dir.path())
            .with_bulk(quiet_bulk().with_id_strategy(IdStrategy::Auto).with_index("tang"));
        IngestPipeline::new(config, transport.clone()).run().unwrap();

        let action = &transport.requests()[0].actions[0];
        assert_eq!(action["index"]["_index"], "tang");
        assert!(action["index"].get("_id").is_none());
    }

    #[test]
    fn test_many_files_are_batched() {
        let dir = TempDir::new().unwrap();
        for i in 0..25 {
            let contents = format!(
                r#"[{{"title":"詩{i}","author":"佚名","paragraphs":["第一句"]}},
                    {{"title":"詞{i}","author":"佚名","paragraphs":["第二句"]}}]"#
            );
            write_file(dir.path(), &format!("batch/{i}.json"), &contents);
        }

        let transport = Arc::new(MemoryTransport::new());
        let config = PipelineConfig::new(dir.path())
            .with_bulk(quiet_bulk().with_max_actions(10).with_workers(2));
        let summary = IngestPipeline::new(config, transport.clone()).run().unwrap();

        assert_eq!(summary.documents_submitted, 50);
        assert_eq!(summary.documents_indexed, 50);
        assert_eq!(summary.batches, 5);
        assert_eq!(transport.documents().len(), 50);
        assert!(summary.bytes_sent > 0);
    }

    #[test]
    fn test_cancelled_before_start() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "poems.json", JING_YE_SI);

        let token = CancellationToken::new();
        token.cancel();

        let transport = Arc::new(MemoryTransport::new());
        let config = PipelineConfig::new(dir.path()).with_bulk(quiet_bulk());
        let summary = IngestPipeline::new(config, transport.clone())
            .with_cancellation(token)
            .run()
            .unwrap();

        assert!(summary.cancelled);
        assert!(!summary.success);
        assert_eq!(summary.documents_submitted, 0);
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_cancelled_mid_run_delivers_submitted_documents() {
        let dir = TempDir::new().unwrap();
        for i in 0..3 {
            let contents = format!(
                r#"[{{"title":"詩{i}","author":"佚名","paragraphs":["第一句"]}},
                    {{"title":"詞{i}","author":"佚名","paragraphs":["第二句"]}}]"#
            );
            write_file(dir.path(), &format!("{i}.json"), &contents);
        }

        let token = CancellationToken::new();
        let loader = Arc::new(InterruptingLoader {
            inner: JsonPoemLoader,
            token: token.clone(),
            calls: AtomicUsize::new(0),
        });
        let transport = Arc::new(MemoryTransport::new());
        let config = PipelineConfig::new(dir.path()).with_bulk(quiet_bulk());
        let summary = IngestPipeline::new(config, transport.clone())
            .with_loader(loader)
            .with_cancellation(token)
            .run()
            .unwrap();

        assert!(summary.cancelled);
        assert!(!summary.success);
        assert_eq!(summary.files_scanned, 2);
        assert_eq!(summary.documents_submitted, 2);
        assert_eq!(summary.documents_indexed, summary.documents_submitted);
        assert_eq!(summary.documents_failed, 0);
        assert_eq!(transport.documents().len(), 2);
    }
}
