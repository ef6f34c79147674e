use super::*;

impl StoreClient {
    pub fn list_databases(&self) -> Result<Vec<String>, StoreError> {
        let resp = self.client.get(self.url("/_all_dbs")).send()?;
        let names: Vec<String> = self.ensure_ok(resp)?.json()?;
        Ok(names)
    }

    pub fn create_database(&self, name: &str) -> Result<Ack, StoreError> {
        let resp = self.client.put(self.url(&format!("/{}", name))).send()?;
        let ack: Ack = self.ensure_ok(resp)?.json()?;
        Ok(ack)
    }

    pub fn destroy_database(&self, name: &str) -> Result<Ack, StoreError> {
        let resp = self.client.delete(self.url(&format!("/{}", name))).send()?;
        let ack: Ack = self.ensure_ok(resp)?.json()?;
        Ok(ack)
    }

    pub fn database_info(&self, name: &str) -> Result<Value, StoreError> {
        let resp = self.client.get(self.url(&format!("/{}", name))).send()?;
        let info: Value = self.ensure_ok(resp)?.json()?;
        Ok(info)
    }

    /// Ask the server to schedule a replication; the transfer itself runs
    /// server-side.
    pub fn trigger_replication(&self, source: &str, target: &str) -> Result<WriteAck, StoreError> {
        let resp = self
            .client
            .post(self.url("/_replicator"))
            .json(&ReplicationRequest {
                source: source.to_string(),
                target: target.to_string(),
                create_target: true,
            })
            .send()?;
        let ack: WriteAck = self.ensure_ok(resp)?.json()?;
        Ok(ack)
    }
}
