use grounded_vector_store::SearchHit;

/// Grounding template: the answer is restricted to the supplied context,
/// absence of an answer must be stated, and citations use the
/// `[filename#chunk_id]` bracket notation that `format_context` emits.
const PROMPT_TEMPLATE: &str = "\
You are a document assistant. Answer the user's question using ONLY the context.
If the answer is not in the context, say you don't have enough information.

Question:
{question}

Context (numbered chunks):
{context}

When possible, cite like [filename#chunk_id].
";

/// Render hits as `[filename#chunk_id] text` lines, newline-joined, keeping
/// the input (similarity-descending) order.
#[must_use]
pub fn format_context(hits: &[SearchHit]) -> String {
    hits.iter()
        .map(|hit| format!("[{}#{}] {}", hit.filename, hit.chunk_id, hit.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Embed the query and the rendered context into the grounding template.
#[must_use]
pub fn assemble_prompt(query: &str, hits: &[SearchHit]) -> String {
    PROMPT_TEMPLATE
        .replace("{question}", query)
        .replace("{context}", &format_context(hits))
}
