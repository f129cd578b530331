use crate::domain::{Resource, Service};
use crate::graph::ServiceGraph;
use crate::util::OrderedMap;

/// Groups the resources and services of a single cluster and exposes the
/// service graph built from them. Immutable after construction.
#[derive(Debug, Clone)]
pub struct LocalState {
    resources: OrderedMap<Resource>,
    services: OrderedMap<Service>,
    service_graph: ServiceGraph,
}

impl LocalState {
    /// Build from insertion-ordered resource and service lists (first write
    /// wins on a duplicate name) and eagerly build the service graph.
    pub fn new(resources: Vec<Resource>, services: Vec<Service>) -> Self {
        let mut resource_map = OrderedMap::new();
        for resource in resources {
            resource_map.insert(resource.resource_name.clone(), resource);
        }

        let mut service_map = OrderedMap::new();
        for service in services {
            service_map.insert(service.service_name.clone(), service);
        }

        let service_graph = ServiceGraph::build(service_map.values());

        Self {
            resources: resource_map,
            services: service_map,
            service_graph,
        }
    }

    pub fn resources(&self) -> &OrderedMap<Resource> {
        &self.resources
    }

    pub fn services(&self) -> &OrderedMap<Service> {
        &self.services
    }

    pub fn service_graph(&self) -> &ServiceGraph {
        &self.service_graph
    }

    /// Resources in the insertion order `LocalAssignmentProblem` indexes by.
    pub fn resources_in_order(&self) -> Vec<&Resource> {
        self.resources.values().collect()
    }

    /// Services in the insertion order `LocalAssignmentProblem` indexes by.
    pub fn services_in_order(&self) -> Vec<&Service> {
        self.services.values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristics::Characteristics;

    #[test]
    fn first_write_wins_and_graph_reflects_services() {
        let r0 = Resource::new("r0", Characteristics::new(1.0, 1.0, 1.0, 0.0));
        let duplicate = Resource::new("r0", Characteristics::new(9.0, 9.0, 9.0, 9.0));
        let service = Service::new("s0", "img", Characteristics::zero(), 0.0, 1);
        let state = LocalState::new(vec![r0, duplicate], vec![service]);
        assert_eq!(state.resources().len(), 1);
        assert_eq!(state.resources().get("r0").unwrap().characteristics.cpu(), 1.0);
        assert_eq!(state.service_graph().node_count(), 1);
    }
}
