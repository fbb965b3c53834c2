use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

/// What `cat-file` prints for an object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatFileMode {
    /// `-p`: the raw payload
    Pretty,
    /// `-t`: the object type
    Type,
    /// `-s`: the payload size in bytes
    Size,
}

impl Repository {
    pub fn cat_file(&mut self, object_id: &str, mode: CatFileMode) -> anyhow::Result<()> {
        let object_id = ObjectId::try_parse(object_id)?;

        match mode {
            CatFileMode::Pretty => {
                let mut writer = self.writer();
                self.database().cat_object(&object_id, &mut **writer)?;
            }
            CatFileMode::Type => {
                let header = self.database().read_header(&object_id)?;
                writeln!(self.writer(), "{}", header.object_type())?;
            }
            CatFileMode::Size => {
                let header = self.database().read_header(&object_id)?;
                writeln!(self.writer(), "{}", header.size())?;
            }
        }

        Ok(())
    }
}
