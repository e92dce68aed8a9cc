use crate::{
    hierarchy, resolve, search, summary, table, CensusBackend, CensusError, ChildLevel, Geoid,
    GeographyMatch, LocatedGeography, ResolvedGeography, RowKey, SummaryDocument,
    TableProjection, Vintage, VintageCatalog,
};

pub struct OpenCensusConfig {
    pub backend: Box<dyn CensusBackend + Send + Sync>,
    pub catalog: VintageCatalog,
}

/// A backend paired with the vintage catalog it is read through.
///
/// Holds no per-request state; every call is independent.
pub struct Census {
    backend: Box<dyn CensusBackend + Send + Sync>,
    catalog: VintageCatalog,
}

pub async fn open_census(config: OpenCensusConfig) -> Result<Census, CensusError> {
    Ok(Census {
        backend: config.backend,
        catalog: config.catalog,
    })
}

impl Census {
    pub fn catalog(&self) -> &VintageCatalog {
        &self.catalog
    }

    pub fn backend(&self) -> &dyn CensusBackend {
        self.backend.as_ref()
    }

    pub async fn resolve(
        &self,
        geoid: &Geoid,
        vintage: Option<&str>,
    ) -> Result<ResolvedGeography, CensusError> {
        resolve::resolve(self.backend(), &self.catalog, geoid, vintage).await
    }

    pub async fn search(
        &self,
        term: &str,
        vintage: Option<&str>,
    ) -> Result<Vec<GeographyMatch>, CensusError> {
        search::search(self.backend(), &self.catalog, term, vintage).await
    }

    pub async fn expand_children(
        &self,
        vintage: &str,
        parents: &[Geoid],
        level: ChildLevel,
    ) -> Result<Vec<LocatedGeography>, CensusError> {
        hierarchy::expand_children(self.backend(), &self.catalog, vintage, parents, level).await
    }

    pub async fn assemble(
        &self,
        vintage: &Vintage,
        key: &RowKey,
    ) -> Result<SummaryDocument, CensusError> {
        summary::assemble(self.backend(), vintage, key).await
    }

    /// Resolves `geoid` and assembles its summary in the chosen vintage.
    pub async fn summary(
        &self,
        geoid: &Geoid,
        vintage: Option<&str>,
    ) -> Result<SummaryDocument, CensusError> {
        let resolved = self.resolve(geoid, vintage).await?;
        self.assemble(&resolved.vintage, &resolved.key).await
    }

    pub async fn locate(
        &self,
        vintage: &str,
        geoids: &[Geoid],
    ) -> Result<Vec<LocatedGeography>, CensusError> {
        table::locate(self.backend(), &self.catalog, vintage, geoids).await
    }

    pub async fn table_details(
        &self,
        vintage: &str,
        table_name: &str,
        geoids: &[Geoid],
        child_level: Option<ChildLevel>,
    ) -> Result<TableProjection, CensusError> {
        table::table_details(
            self.backend(),
            &self.catalog,
            vintage,
            table_name,
            geoids,
            child_level,
        )
        .await
    }
}
