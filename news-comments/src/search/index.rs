//! Full-text comment index using Tantivy (BM25)

use tantivy::collector::TopDocs;
use tantivy::query::QueryParser;
use tantivy::schema::{
    Field, IndexRecordOption, Schema, TextFieldIndexing, TextOptions, Value, INDEXED, STORED,
    TEXT,
};
use tantivy::{doc, Index, IndexReader, IndexWriter, ReloadPolicy, Score, TantivyDocument, Term};
use tracing::{debug, info, warn};

use crate::config::SearchSettings;
use crate::error::Result;
use crate::model::{Comment, CommentId};

/// Writer heap for the single indexing thread
const WRITER_HEAP_BYTES: usize = 20_000_000;

/// In-RAM index over comment text and owner name
pub struct CommentIndex {
    index: Index,
    reader: IndexReader,
    writer: IndexWriter,
    // Field handles
    id_field: Field,
    text_field: Field,
    user_name_field: Field,
    text_boost: Score,
    user_name_boost: Score,
}

impl CommentIndex {
    pub fn in_ram(settings: &SearchSettings) -> Result<Self> {
        info!(
            "Creating comment search index in RAM (text boost: {}, user name boost: {})",
            settings.text_boost, settings.user_name_boost
        );

        let mut schema_builder = Schema::builder();

        let id_field = schema_builder.add_i64_field("id", INDEXED | STORED);

        // Comment bodies are English prose: stem them
        let text_options = TextOptions::default().set_indexing_options(
            TextFieldIndexing::default()
                .set_tokenizer("en_stem")
                .set_index_option(IndexRecordOption::WithFreqsAndPositions),
        );
        let text_field = schema_builder.add_text_field("text", text_options);
        let user_name_field = schema_builder.add_text_field("user_name", TEXT);
        let schema = schema_builder.build();

        let index = Index::create_in_ram(schema);
        let writer = index.writer_with_num_threads(1, WRITER_HEAP_BYTES)?;
        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()?;

        Ok(Self {
            index,
            reader,
            writer,
            id_field,
            text_field,
            user_name_field,
            text_boost: settings.text_boost,
            user_name_boost: settings.user_name_boost,
        })
    }

    /// Add or replace the indexed document for `comment`. Visible after `commit`.
    pub fn index_comment(&mut self, comment: &Comment) -> Result<()> {
        self.writer
            .delete_term(Term::from_field_i64(self.id_field, comment.id));

        self.writer.add_document(doc!(
            self.id_field => comment.id,
            self.text_field => comment.text.as_str(),
            self.user_name_field => comment.user.user_name.as_str(),
        ))?;
        debug!("Indexed comment: {}", comment.id);
        Ok(())
    }

    /// Commit pending changes and make them searchable
    pub fn commit(&mut self) -> Result<()> {
        self.writer.commit()?;
        self.reader.reload()?;
        Ok(())
    }

    /// Ids of the best `limit` matches after skipping `offset`, by descending score
    pub fn search(&self, query: &str, offset: usize, limit: usize) -> Result<Vec<(CommentId, Score)>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let mut query_parser =
            QueryParser::for_index(&self.index, vec![self.text_field, self.user_name_field]);
        query_parser.set_field_boost(self.text_field, self.text_boost);
        query_parser.set_field_boost(self.user_name_field, self.user_name_boost);

        // Free text from callers must never fail to parse
        let (parsed_query, errors) = query_parser.parse_query_lenient(query);
        if !errors.is_empty() {
            warn!("Ignored {} malformed clause(s) in query {:?}", errors.len(), query);
        }

        // Never ask the collector for more slots than there are documents
        let searcher = self.reader.searcher();
        let num_docs = searcher.num_docs() as usize;
        if offset >= num_docs {
            return Ok(Vec::new());
        }
        let limit = limit.min(num_docs - offset);

        let top_docs = searcher.search(
            &parsed_query,
            &TopDocs::with_limit(limit).and_offset(offset),
        )?;

        let mut hits = Vec::with_capacity(top_docs.len());
        for (score, doc_address) in top_docs {
            let retrieved: TantivyDocument = searcher.doc(doc_address)?;
            if let Some(id) = retrieved.get_first(self.id_field).and_then(|v| v.as_i64()) {
                hits.push((id, score));
            }
        }

        debug!("Query {:?} matched {} comment(s)", query, hits.len());
        Ok(hits)
    }

    /// Number of indexed comments
    pub fn count(&self) -> usize {
        self.reader.searcher().num_docs() as usize
    }
}
