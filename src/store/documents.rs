use super::*;

impl StoreClient {
    pub fn list_documents(
        &self,
        db: &str,
        opts: &ListOptions,
    ) -> Result<Vec<DocRow>, StoreError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(limit) = opts.limit {
            query.push(("limit", limit.to_string()));
        }
        // _all_docs takes its keys as JSON values.
        if let Some(key) = &opts.startkey {
            query.push(("startkey", Value::String(key.clone()).to_string()));
        }
        if let Some(key) = &opts.endkey {
            query.push(("endkey", Value::String(key.clone()).to_string()));
        }
        if opts.include_docs {
            query.push(("include_docs", "true".to_string()));
        }

        let resp = self
            .client
            .get(self.url(&format!("/{}/_all_docs", db)))
            .query(&query)
            .send()?;
        let body: AllDocsResponse = self.ensure_ok(resp)?.json()?;
        Ok(body.rows)
    }

    pub fn get_document(&self, db: &str, id: &str) -> Result<Value, StoreError> {
        let resp = self
            .client
            .get(self.url(&format!("/{}/{}", db, id)))
            .send()?;
        let doc: Value = self.ensure_ok(resp)?.json()?;
        Ok(doc)
    }

    pub fn get_document_revisions(
        &self,
        db: &str,
        id: &str,
    ) -> Result<DocumentRevisions, StoreError> {
        let resp = self
            .client
            .get(self.url(&format!("/{}/{}", db, id)))
            .query(&[("conflicts", "true"), ("revs_info", "true")])
            .send()?;
        let doc: DocumentRevisions = self.ensure_ok(resp)?.json()?;
        Ok(doc)
    }

    /// Documents carrying an `_id` are written to that id; the server names
    /// the rest.
    pub fn insert_document(&self, db: &str, doc: &Value) -> Result<WriteAck, StoreError> {
        let req = match doc.get("_id").and_then(Value::as_str) {
            Some(id) => self.client.put(self.url(&format!("/{}/{}", db, id))),
            None => self.client.post(self.url(&format!("/{}", db))),
        };
        let resp = req.json(doc).send()?;
        let ack: WriteAck = self.ensure_ok(resp)?.json()?;
        Ok(ack)
    }

    pub fn delete_document(&self, db: &str, id: &str, rev: &str) -> Result<WriteAck, StoreError> {
        let resp = self
            .client
            .delete(self.url(&format!("/{}/{}", db, id)))
            .query(&[("rev", rev)])
            .send()?;
        let ack: WriteAck = self.ensure_ok(resp)?.json()?;
        Ok(ack)
    }

    pub fn bulk_docs(&self, db: &str, docs: &[Tombstone]) -> Result<Vec<BulkRow>, StoreError> {
        let resp = self
            .client
            .post(self.url(&format!("/{}/_bulk_docs", db)))
            .json(&BulkDocsRequest { docs })
            .send()?;
        let rows: Vec<BulkRow> = self.ensure_ok(resp)?.json()?;
        Ok(rows)
    }
}
